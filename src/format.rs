//! Indian (lakh/crore) digit grouping for display amounts
//!
//! `1234567.8` renders as `12,34,567.80`: the last three integer digits form one
//! group and every group further left has two digits.

/// Anything that may be shown as an amount on the sheet
///
/// Returns `None` when there is no usable number, which renders as `0.00`.
pub trait DisplayAmount {
    fn display_value(&self) -> Option<f64>;
}

impl DisplayAmount for f64 {
    fn display_value(&self) -> Option<f64> {
        Some(*self)
    }
}

impl DisplayAmount for f32 {
    fn display_value(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

macro_rules! impl_display_amount_int {
    ($($t:ty),*) => {
        $(
            impl DisplayAmount for $t {
                fn display_value(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_display_amount_int!(i32, i64, u32, u64, usize);

impl DisplayAmount for str {
    fn display_value(&self) -> Option<f64> {
        self.trim().parse::<f64>().ok()
    }
}

impl DisplayAmount for String {
    fn display_value(&self) -> Option<f64> {
        self.as_str().display_value()
    }
}

impl<T: DisplayAmount> DisplayAmount for Option<T> {
    fn display_value(&self) -> Option<f64> {
        self.as_ref().and_then(|v| v.display_value())
    }
}

impl<T: DisplayAmount + ?Sized> DisplayAmount for &T {
    fn display_value(&self) -> Option<f64> {
        (**self).display_value()
    }
}

/// Render `amount` with two decimals and Indian digit grouping
///
/// Never fails: missing, unparseable and non-finite values render as `0.00`.
pub fn format_indian_grouping<T: DisplayAmount + ?Sized>(amount: &T) -> String {
    let value = match amount.display_value() {
        Some(v) if v.is_finite() => v,
        _ => return "0.00".to_string(),
    };

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let grouped = group_indian(integer);
    // -0.004 rounds to 0.00 and is shown without a sign
    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    format!("{}{}.{}", sign, grouped, fraction)
}

/// `Rs. ` prefixed amount, as printed on the sheet
pub fn format_rupees<T: DisplayAmount + ?Sized>(amount: &T) -> String {
    format!("Rs. {}", format_indian_grouping(amount))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(last_three);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lakh_grouping() {
        assert_eq!(format_indian_grouping(&1234567.8), "12,34,567.80");
        assert_eq!(format_indian_grouping(&100000.0), "1,00,000.00");
        assert_eq!(format_indian_grouping(&12345678901.234), "12,34,56,78,901.23");
    }

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(format_indian_grouping(&999.5), "999.50");
        assert_eq!(format_indian_grouping(&0.0), "0.00");
        assert_eq!(format_indian_grouping(&1000), "1,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_indian_grouping(&-1000.0), "-1,000.00");
        assert_eq!(format_indian_grouping(&-1000), "-1,000.00");
        assert_eq!(format_indian_grouping(&-1234567.891), "-12,34,567.89");
        assert_eq!(format_indian_grouping(&-0.001), "0.00");
    }

    #[test]
    fn test_rounding_carries_into_grouping() {
        assert_eq!(format_indian_grouping(&99999.999), "1,00,000.00");
    }

    #[test]
    fn test_unusable_input_renders_zero() {
        assert_eq!(format_indian_grouping("abc"), "0.00");
        assert_eq!(format_indian_grouping(""), "0.00");
        assert_eq!(format_indian_grouping(&f64::NAN), "0.00");
        assert_eq!(format_indian_grouping(&f64::INFINITY), "0.00");
        assert_eq!(format_indian_grouping(&None::<f64>), "0.00");
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(format_indian_grouping(" 250000 "), "2,50,000.00");
        assert_eq!(format_indian_grouping(&"-1000".to_string()), "-1,000.00");
        // Grouped text is a parsing-boundary concern, not a display one
        assert_eq!(format_indian_grouping("2,50,000"), "0.00");
    }

    #[test]
    fn test_rupee_prefix() {
        assert_eq!(format_rupees(&5000.0), "Rs. 5,000.00");
        assert_eq!(format_rupees(&Some(1234567.8)), "Rs. 12,34,567.80");
    }
}

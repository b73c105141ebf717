//! Compound growth and discounting of a single amount

/// Grow `present_value` at `annual_rate_pct` for `years` (fractional years allowed)
///
/// Returns `present_value` unchanged for a zero rate or zero years. Negative
/// amounts keep their sign, so a shortfall can be projected the same way.
pub fn future_value(present_value: f64, annual_rate_pct: f64, years: f64) -> f64 {
    if years == 0.0 || annual_rate_pct == 0.0 {
        return present_value;
    }
    present_value * (1.0 + annual_rate_pct / 100.0).powf(years)
}

/// One-time investment today that grows into `deficit` after `years`
///
/// Zero when there is nothing left to fund.
pub fn required_lumpsum(deficit: f64, years: f64, annual_rate_pct: f64) -> f64 {
    if deficit <= 0.0 {
        return 0.0;
    }
    deficit / (1.0 + annual_rate_pct / 100.0).powf(years)
}

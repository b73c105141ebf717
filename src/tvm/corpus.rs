//! Retirement corpus sizing

use super::RATE_EPSILON;

/// Corpus needed at retirement to pay `monthly_expense` for `payout_years`
///
/// `monthly_expense` is already projected to the retirement date. The corpus earns
/// `investment_return_pct`, expenses keep inflating at `inflation_rate_pct`, and
/// `tax_rate_pct` of the real return is lost to tax. The result is the present value
/// of an ordinary annuity of the annual expense at the tax-adjusted real rate.
///
/// When that rate is not positive the corpus cannot out-earn the expenses, so the
/// plain sum `annual_expense × payout_years` is used.
pub fn retirement_corpus(
    monthly_expense: f64,
    payout_years: f64,
    inflation_rate_pct: f64,
    tax_rate_pct: f64,
    investment_return_pct: f64,
) -> f64 {
    let annual_expense = monthly_expense * 12.0;

    let real_return = (1.0 + investment_return_pct / 100.0) / (1.0 + inflation_rate_pct / 100.0) - 1.0;
    let net_real_return = real_return * (1.0 - tax_rate_pct / 100.0);

    if net_real_return <= RATE_EPSILON {
        return annual_expense * payout_years;
    }

    annual_expense * (1.0 - (1.0 + net_real_return).powf(-payout_years)) / net_real_return
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_falls_back_when_return_matches_inflation() {
        let corpus = retirement_corpus(50_000.0, 25.0, 6.0, 20.0, 6.0);
        assert_relative_eq!(corpus, 50_000.0 * 12.0 * 25.0, epsilon = 1e-6);
    }

    #[test]
    fn test_falls_back_when_fully_taxed() {
        let corpus = retirement_corpus(50_000.0, 25.0, 6.0, 100.0, 12.0);
        assert_relative_eq!(corpus, 50_000.0 * 12.0 * 25.0, epsilon = 1e-6);
    }

    #[test]
    fn test_falls_back_when_real_return_negative() {
        let corpus = retirement_corpus(10_000.0, 20.0, 9.0, 0.0, 5.0);
        assert_relative_eq!(corpus, 10_000.0 * 12.0 * 20.0, epsilon = 1e-6);
    }

    #[test]
    fn test_annuity_present_value() {
        // 12% return, 6% inflation, 30% tax
        let real: f64 = 1.12 / 1.06 - 1.0;
        let net = real * 0.7;
        let expected = 120_000.0 * (1.0 - (1.0 + net).powf(-20.0)) / net;

        let corpus = retirement_corpus(10_000.0, 20.0, 6.0, 30.0, 12.0);
        assert_relative_eq!(corpus, expected, max_relative = 1e-12);
        assert!(corpus < 120_000.0 * 20.0);
    }

    #[test]
    fn test_more_tax_needs_bigger_corpus() {
        let low_tax = retirement_corpus(40_000.0, 25.0, 6.0, 10.0, 11.0);
        let high_tax = retirement_corpus(40_000.0, 25.0, 6.0, 30.0, 11.0);
        assert!(high_tax > low_tax);
    }

    #[test]
    fn test_zero_payout_years_needs_nothing() {
        assert_eq!(retirement_corpus(40_000.0, 0.0, 6.0, 10.0, 11.0), 0.0);
    }
}

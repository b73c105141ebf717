//! Time-value-of-money engine for goal planning
//!
//! Pure functions over annualized percentages (8.0 means 8%):
//! - Future value projection under inflation or growth
//! - Required monthly contribution (SIP) and one-time lumpsum to close a deficit
//! - Step-up SIP first-year amount
//! - Retirement corpus needed to fund an inflating, taxed expense stream
//!
//! Inputs are assumed pre-validated (`years >= 0`, rates `> -100`, amounts `>= 0`);
//! see [`crate::goals::GoalSpec::validate`].

mod growth;
mod contribution;
mod corpus;

pub use growth::{future_value, required_lumpsum};
pub use contribution::{required_monthly_contribution, step_up_contribution, DEFAULT_STEP_UP_RATE_PCT};
pub use corpus::retirement_corpus;

/// Rates with an absolute value below this are treated as zero
pub(crate) const RATE_EPSILON: f64 = 1e-12;

//! Periodic contribution solvers

use super::RATE_EPSILON;
use crate::error::PlannerError;

/// Step-up rate used when a goal does not specify one (percent per year)
pub const DEFAULT_STEP_UP_RATE_PCT: f64 = 10.0;

/// Monthly contribution whose future value after `years` equals `deficit`
///
/// Ordinary annuity (contribution at the end of each month) at a monthly rate of
/// `annual_rate_pct / 12`. Over-funded goals need nothing, so `deficit <= 0` gives 0.
///
/// # Errors
/// `PlannerError::ZeroHorizon` when a positive deficit has to be funded over zero
/// months; callers exclude such goals before asking for a SIP.
pub fn required_monthly_contribution(
    deficit: f64,
    years: f64,
    annual_rate_pct: f64,
) -> Result<f64, PlannerError> {
    if deficit <= 0.0 {
        return Ok(0.0);
    }

    let months = years * 12.0;
    if months <= 0.0 {
        return Err(PlannerError::ZeroHorizon { deficit, years });
    }

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    if monthly_rate.abs() < RATE_EPSILON {
        return Ok(deficit / months);
    }

    // (1 + r)^n - 1 loses every digit once n * r falls below f64 resolution
    let growth = (months * monthly_rate.ln_1p()).exp_m1();
    Ok(deficit * monthly_rate / growth)
}

/// First-year monthly amount of a step-up SIP
///
/// Computed as `base × (1 − step_up_rate_pct / 100)`. This is a flat haircut on the
/// level SIP, not the solution of a growing-annuity equation: a true step-up plan
/// reaching the same corpus would start at a different amount. Kept as-is until the
/// product definition changes.
pub fn step_up_contribution(base_monthly_contribution: f64, step_up_rate_pct: f64) -> f64 {
    base_monthly_contribution * (1.0 - step_up_rate_pct / 100.0)
}

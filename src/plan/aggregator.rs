//! Per-goal calculation and plan totals

use log::{debug, warn};
use rayon::prelude::*;

use super::results::{AggregateResult, GoalResult};
use crate::error::PlannerError;
use crate::goals::{GoalKind, GoalSpec};
use crate::tvm::{
    future_value, required_lumpsum, required_monthly_contribution, retirement_corpus,
    step_up_contribution, DEFAULT_STEP_UP_RATE_PCT,
};

/// Calculate the funding plan for one goal
///
/// # Errors
/// `PlannerError::ZeroHorizon` when the goal is due now but not yet funded. Use
/// [`is_eligible`] (or [`compute_all`]) to screen such goals out first.
pub fn compute_goal(spec: &GoalSpec) -> Result<GoalResult, PlannerError> {
    let inflated_target = future_value(spec.target_present_value, spec.inflation_rate_pct, spec.horizon_years);

    let future_value_required = match spec.kind() {
        GoalKind::TargetAmount => inflated_target,
        // Today's monthly expense, projected to the retirement date, funded for the payout years
        GoalKind::RecurringExpenseStream => retirement_corpus(
            inflated_target,
            spec.payout_years,
            spec.inflation_rate_pct,
            spec.tax_rate_pct,
            spec.expected_return_pct,
        ),
    };

    let existing_savings_future_value =
        future_value(spec.existing_savings, spec.expected_return_pct, spec.horizon_years);

    let deficit = (future_value_required - existing_savings_future_value).max(0.0);

    let required_monthly_sip =
        required_monthly_contribution(deficit, spec.horizon_years, spec.expected_return_pct)?;
    let required_step_up_sip = step_up_contribution(
        required_monthly_sip,
        spec.step_up_rate_pct.unwrap_or(DEFAULT_STEP_UP_RATE_PCT),
    );
    let required_lumpsum = required_lumpsum(deficit, spec.horizon_years, spec.expected_return_pct);

    let progress_pct = if future_value_required > 0.0 {
        existing_savings_future_value / future_value_required * 100.0
    } else {
        0.0
    };

    debug!(
        "Goal '{}': FV required {:.2}, savings FV {:.2}, deficit {:.2}, SIP {:.2}",
        spec.name, future_value_required, existing_savings_future_value, deficit, required_monthly_sip
    );

    Ok(GoalResult {
        name: spec.name.clone(),
        category: spec.category,
        future_value_required,
        existing_savings_future_value,
        deficit,
        progress_pct,
        required_monthly_sip,
        required_step_up_sip,
        required_lumpsum,
    })
}

/// Whether a goal is being pursued
///
/// A goal left at zero horizon (or, for retirement income, zero payout years) on the
/// form is treated as not selected rather than as an error.
pub fn is_eligible(spec: &GoalSpec) -> bool {
    if spec.horizon_years <= 0.0 {
        return false;
    }
    match spec.kind() {
        GoalKind::TargetAmount => true,
        GoalKind::RecurringExpenseStream => spec.payout_years > 0.0,
    }
}

/// Calculate every eligible goal in input order and total the contributions
///
/// Goals that are not pursued, or whose calculation fails, are listed in
/// `excluded` instead.
pub fn compute_all(specs: &[GoalSpec]) -> AggregateResult {
    let (eligible, excluded) = partition(specs);
    let outcomes = eligible.iter().map(|spec| (spec.name.as_str(), compute_goal(spec))).collect();
    assemble(outcomes, excluded)
}

/// Same as [`compute_all`], evaluating goals on the rayon thread pool
///
/// Goals are independent, and the indexed collect keeps input order.
pub fn compute_all_parallel(specs: &[GoalSpec]) -> AggregateResult {
    let (eligible, excluded) = partition(specs);
    let outcomes = eligible.par_iter().map(|spec| (spec.name.as_str(), compute_goal(spec))).collect();
    assemble(outcomes, excluded)
}

fn partition(specs: &[GoalSpec]) -> (Vec<&GoalSpec>, Vec<String>) {
    let mut eligible = Vec::with_capacity(specs.len());
    let mut excluded = Vec::new();

    for spec in specs {
        if is_eligible(spec) {
            eligible.push(spec);
        } else {
            debug!("Excluding goal '{}': not being pursued", spec.name);
            excluded.push(spec.name.clone());
        }
    }

    (eligible, excluded)
}

/// Keep successful results in order; failed goals join `excluded` after the unselected ones
fn assemble(outcomes: Vec<(&str, Result<GoalResult, PlannerError>)>, mut excluded: Vec<String>) -> AggregateResult {
    let mut results = Vec::with_capacity(outcomes.len());
    for (name, outcome) in outcomes {
        match outcome {
            Ok(result) => results.push(result),
            Err(e) => {
                warn!("Excluding goal '{}': {}", name, e);
                excluded.push(name.to_string());
            }
        }
    }
    AggregateResult::from_results(results, excluded)
}

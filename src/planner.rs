//! Planner for running goal plans under one configuration
//!
//! Holds the run's [`PlanConfig`], fills per-goal defaults from it, and runs single
//! plans, batches of clients, or what-if tables over expected returns.

use chrono::NaiveDate;
use log::info;
use rayon::prelude::*;

use crate::config::PlanConfig;
use crate::goals::GoalSpec;
use crate::plan::{compute_all, compute_all_parallel, AggregateResult};
use crate::report::PlanReport;

/// Configured goal planner
///
/// # Example
/// ```ignore
/// let planner = GoalPlanner::with_config(PlanConfig::from_env());
/// let plan = planner.run(&goals);
///
/// // Required SIP if markets return 8%, 10% or 12%
/// for (rate, plan) in planner.run_return_scenarios(&goals, &[8.0, 10.0, 12.0]) {
///     println!("{rate}%: {}", plan.total_monthly_sip);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoalPlanner {
    config: PlanConfig,
}

impl GoalPlanner {
    /// Create planner with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: PlanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Copy of `goals` with the configured step-up rate filled in where missing
    pub fn prepare(&self, goals: &[GoalSpec]) -> Vec<GoalSpec> {
        goals
            .iter()
            .map(|goal| {
                let mut goal = goal.clone();
                if goal.step_up_rate_pct.is_none() {
                    goal.step_up_rate_pct = Some(self.config.step_up_rate_pct);
                }
                goal
            })
            .collect()
    }

    /// Compute the plan for one client's goals
    pub fn run(&self, goals: &[GoalSpec]) -> AggregateResult {
        let prepared = self.prepare(goals);
        let result = if self.config.parallel {
            compute_all_parallel(&prepared)
        } else {
            compute_all(&prepared)
        };

        info!(
            "Planned {} goals ({} excluded): SIP {:.2}, step-up SIP {:.2}, lumpsum {:.2}",
            result.goals.len(),
            result.excluded.len(),
            result.total_monthly_sip,
            result.total_step_up_sip,
            result.total_lumpsum
        );
        result
    }

    /// Compute plans for several clients at once
    pub fn run_batch(&self, clients: &[Vec<GoalSpec>]) -> Vec<AggregateResult> {
        clients
            .par_iter()
            .map(|goals| compute_all(&self.prepare(goals)))
            .collect()
    }

    /// Re-run the plan with every goal's expected return replaced by each rate
    pub fn run_return_scenarios(&self, goals: &[GoalSpec], expected_returns_pct: &[f64]) -> Vec<(f64, AggregateResult)> {
        let prepared = self.prepare(goals);
        expected_returns_pct
            .iter()
            .map(|&rate| {
                let adjusted: Vec<GoalSpec> = prepared
                    .iter()
                    .cloned()
                    .map(|mut goal| {
                        goal.expected_return_pct = rate;
                        goal
                    })
                    .collect();
                (rate, compute_all(&adjusted))
            })
            .collect()
    }

    /// Format a computed plan for the sheet, using the configured client and currency
    pub fn report(&self, plan: &AggregateResult, report_date: NaiveDate) -> PlanReport {
        PlanReport::build(&self.config.client_name, report_date, plan)
            .with_currency_prefix(&self.config.currency_prefix)
    }
}

//! Output records handed to the report renderer

use serde::{Deserialize, Serialize};

use crate::goals::GoalCategory;

/// Funding plan for a single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalResult {
    pub name: String,
    pub category: GoalCategory,

    /// Inflated cost (or retirement corpus) needed at the horizon
    pub future_value_required: f64,

    /// What existing savings grow to by the horizon
    pub existing_savings_future_value: f64,

    /// Shortfall still to be funded, never negative
    pub deficit: f64,

    /// Share of the requirement already covered; exceeds 100 when over-funded
    pub progress_pct: f64,

    pub required_monthly_sip: f64,
    pub required_step_up_sip: f64,
    pub required_lumpsum: f64,
}

impl GoalResult {
    pub fn is_fully_funded(&self) -> bool {
        self.deficit <= 0.0
    }
}

/// Per-goal results in presentation order plus contribution totals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    pub goals: Vec<GoalResult>,
    pub total_monthly_sip: f64,
    pub total_step_up_sip: f64,
    pub total_lumpsum: f64,

    /// Names of goals left out because they were not being pursued
    #[serde(default)]
    pub excluded: Vec<String>,
}

impl AggregateResult {
    /// Build totals from results already in presentation order
    pub fn from_results(goals: Vec<GoalResult>, excluded: Vec<String>) -> Self {
        let total_monthly_sip = goals.iter().map(|g| g.required_monthly_sip).sum();
        let total_step_up_sip = goals.iter().map(|g| g.required_step_up_sip).sum();
        let total_lumpsum = goals.iter().map(|g| g.required_lumpsum).sum();

        Self {
            goals,
            total_monthly_sip,
            total_step_up_sip,
            total_lumpsum,
            excluded,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Get summary statistics across all goals
    pub fn summary(&self) -> PlanSummary {
        let total_future_value_required: f64 = self.goals.iter().map(|g| g.future_value_required).sum();
        let total_savings_future_value: f64 = self.goals.iter().map(|g| g.existing_savings_future_value).sum();
        let total_deficit: f64 = self.goals.iter().map(|g| g.deficit).sum();
        let funded_goals = self.goals.iter().filter(|g| g.is_fully_funded()).count();

        let overall_progress_pct = if total_future_value_required > 0.0 {
            total_savings_future_value / total_future_value_required * 100.0
        } else {
            0.0
        };

        PlanSummary {
            goal_count: self.goals.len(),
            funded_goals,
            total_future_value_required,
            total_savings_future_value,
            total_deficit,
            overall_progress_pct,
        }
    }
}

/// Summary statistics for a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub goal_count: usize,
    pub funded_goals: usize,
    pub total_future_value_required: f64,
    pub total_savings_future_value: f64,
    pub total_deficit: f64,
    pub overall_progress_pct: f64,
}

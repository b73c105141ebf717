//! Goal aggregation: apply the TVM engine to each goal and total the contributions

mod results;
mod aggregator;

pub use results::{GoalResult, AggregateResult, PlanSummary};
pub use aggregator::{compute_goal, compute_all, compute_all_parallel, is_eligible};

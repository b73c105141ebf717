//! Goal Planner - contribution planning engine for goal-based investment sheets
//!
//! This library provides:
//! - Time-value-of-money primitives (future value, SIP, lumpsum, retirement corpus)
//! - Goal specifications and a validated text-to-number parsing boundary
//! - Per-goal funding plans and plan totals
//! - Indian digit grouping for presenting amounts
//! - Formatted report records for the document renderer

pub mod error;
pub mod tvm;
pub mod goals;
pub mod plan;
pub mod format;
pub mod report;
pub mod config;
pub mod planner;

// Re-export commonly used types
pub use error::PlannerError;
pub use goals::{GoalSpec, GoalKind, GoalCategory};
pub use plan::{compute_goal, compute_all, GoalResult, AggregateResult};
pub use format::format_indian_grouping;
pub use report::PlanReport;
pub use config::PlanConfig;
pub use planner::GoalPlanner;

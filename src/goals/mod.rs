//! Goal specifications and the text-to-number parsing boundary

mod data;
pub mod loader;

pub use data::{GoalSpec, GoalKind, GoalCategory};
pub use loader::{load_goals, load_goals_from_reader, parse_amount, parse_percent};

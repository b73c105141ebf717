//! Error types for goal planning

use thiserror::Error;

/// Errors raised at the parsing boundary and by the contribution engine
#[derive(Debug, Error)]
pub enum PlannerError {
    /// A goal failed validation before reaching the engine
    #[error("invalid goal '{goal}': {reason}")]
    InvalidGoal { goal: String, reason: String },

    /// A non-zero periodic contribution was requested over a zero-length horizon
    #[error("cannot spread a deficit of {deficit:.2} over a horizon of {years} years")]
    ZeroHorizon { deficit: f64, years: f64 },

    /// A free-text field could not be turned into a number or label
    #[error("could not parse {field} from '{value}'")]
    Parse { field: String, value: String },

    /// Error tagged with the data row it came from (1-based)
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<PlannerError>,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlannerError {
    pub fn invalid_goal(goal: &str, reason: impl Into<String>) -> Self {
        PlannerError::InvalidGoal {
            goal: goal.to_string(),
            reason: reason.into(),
        }
    }

    pub fn parse(field: &str, value: &str) -> Self {
        PlannerError::Parse {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Wrap this error with the CSV data row it was raised for
    pub fn at_row(self, row: usize) -> Self {
        PlannerError::Row {
            row,
            source: Box::new(self),
        }
    }
}

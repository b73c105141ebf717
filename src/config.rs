//! Planner configuration
//!
//! Resolution order used by the binaries: command-line flags, then environment
//! variables, then a JSON config file, then the defaults below.

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::tvm::DEFAULT_STEP_UP_RATE_PCT;

/// Settings shared by every plan computed in one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Step-up rate applied to goals that do not set their own (percent)
    #[serde(default = "default_step_up_rate")]
    pub step_up_rate_pct: f64,

    /// Evaluate goals on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// Client the sheet is prepared for
    #[serde(default)]
    pub client_name: String,

    /// Prefix for amounts in the investment summary line
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,
}

fn default_step_up_rate() -> f64 { DEFAULT_STEP_UP_RATE_PCT }
fn default_currency_prefix() -> String { "Rs.".to_string() }

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            step_up_rate_pct: default_step_up_rate(),
            parallel: false,
            client_name: String::new(),
            currency_prefix: default_currency_prefix(),
        }
    }
}

impl PlanConfig {
    /// Load from a JSON file; missing fields take their defaults
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self, PlannerError> {
        let file = File::open(path)?;
        let config: PlanConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `STEP_UP_RATE_PCT`, `PLAN_PARALLEL` and `CLIENT_NAME`
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Apply environment overrides on top of this config
    pub fn with_env_overrides(self) -> Self {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup`
    ///
    /// Unparseable or out-of-range values are ignored with a warning.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(raw) = lookup("STEP_UP_RATE_PCT") {
            match raw.trim().trim_end_matches('%').trim().parse::<f64>() {
                Ok(rate) if (0.0..=100.0).contains(&rate) => self.step_up_rate_pct = rate,
                _ => log::warn!("Ignoring STEP_UP_RATE_PCT='{}'", raw),
            }
        }

        if let Some(raw) = lookup("PLAN_PARALLEL") {
            self.parallel = matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        if let Some(name) = lookup("CLIENT_NAME") {
            if !name.trim().is_empty() {
                self.client_name = name.trim().to_string();
            }
        }

        self
    }

    pub fn validate(&self) -> Result<(), PlannerError> {
        if !(0.0..=100.0).contains(&self.step_up_rate_pct) {
            return Err(PlannerError::Config("step_up_rate_pct must be between 0 and 100".to_string()));
        }
        Ok(())
    }
}

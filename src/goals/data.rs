//! Goal data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

/// Shape of the money a goal needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalKind {
    /// A lump sum needed on the target date
    TargetAmount,
    /// A monthly expense funded for a number of years from the target date
    RecurringExpenseStream,
}

/// Financial goals offered on the planning sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    /// Child education
    Education,
    /// Marriage or another large one-off purchase
    Marriage,
    EmergencyFund,
    /// Retirement expressed as a lump sum target
    RetirementCorpus,
    /// Retirement expressed as a monthly expense to fund
    RetirementIncome,
}

impl GoalCategory {
    pub fn kind(&self) -> GoalKind {
        match self {
            GoalCategory::RetirementIncome => GoalKind::RecurringExpenseStream,
            _ => GoalKind::TargetAmount,
        }
    }

    /// Label used on the sheet and in CSV input
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalCategory::Education => "Education",
            GoalCategory::Marriage => "Marriage",
            GoalCategory::EmergencyFund => "Emergency Fund",
            GoalCategory::RetirementCorpus => "Retirement Corpus",
            GoalCategory::RetirementIncome => "Retirement Income",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalCategory {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.as_str() {
            "education" => Ok(GoalCategory::Education),
            "marriage" | "largepurchase" => Ok(GoalCategory::Marriage),
            "emergencyfund" | "emergency" => Ok(GoalCategory::EmergencyFund),
            "retirementcorpus" => Ok(GoalCategory::RetirementCorpus),
            "retirementincome" => Ok(GoalCategory::RetirementIncome),
            _ => Err(PlannerError::parse("Category", s)),
        }
    }
}

/// Parameters for a single goal, already converted to numbers
///
/// Percentages are annual and expressed as whole numbers (8.0 = 8%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSpec {
    /// Display name, e.g. "Aarav's engineering degree"
    pub name: String,

    pub category: GoalCategory,

    /// Years until the goal's target date
    pub horizon_years: f64,

    /// Cost in today's money; for recurring goals, today's monthly expense
    pub target_present_value: f64,

    pub inflation_rate_pct: f64,

    pub expected_return_pct: f64,

    /// Amount already set aside for this goal
    #[serde(default)]
    pub existing_savings: f64,

    /// Tax drag on returns during the payout phase (recurring goals only)
    #[serde(default)]
    pub tax_rate_pct: f64,

    /// Years the expense stream must be funded (recurring goals only)
    #[serde(default)]
    pub payout_years: f64,

    /// Annual step-up for the escalating SIP; `None` means the default 10%
    #[serde(default)]
    pub step_up_rate_pct: Option<f64>,
}

impl GoalSpec {
    /// Goal that needs a lump sum at the end of the horizon
    pub fn target(
        name: impl Into<String>,
        category: GoalCategory,
        horizon_years: f64,
        target_present_value: f64,
        inflation_rate_pct: f64,
        expected_return_pct: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            horizon_years,
            target_present_value,
            inflation_rate_pct,
            expected_return_pct,
            existing_savings: 0.0,
            tax_rate_pct: 0.0,
            payout_years: 0.0,
            step_up_rate_pct: None,
        }
    }

    /// Retirement income goal: fund today's `monthly_expense` for `payout_years`
    /// starting `horizon_years` from now
    pub fn recurring(
        name: impl Into<String>,
        horizon_years: f64,
        monthly_expense: f64,
        payout_years: f64,
        inflation_rate_pct: f64,
        expected_return_pct: f64,
        tax_rate_pct: f64,
    ) -> Self {
        Self {
            name: name.into(),
            category: GoalCategory::RetirementIncome,
            horizon_years,
            target_present_value: monthly_expense,
            inflation_rate_pct,
            expected_return_pct,
            existing_savings: 0.0,
            tax_rate_pct,
            payout_years,
            step_up_rate_pct: None,
        }
    }

    pub fn with_existing_savings(mut self, existing_savings: f64) -> Self {
        self.existing_savings = existing_savings;
        self
    }

    pub fn with_step_up_rate(mut self, step_up_rate_pct: f64) -> Self {
        self.step_up_rate_pct = Some(step_up_rate_pct);
        self
    }

    pub fn kind(&self) -> GoalKind {
        self.category.kind()
    }

    pub fn is_recurring(&self) -> bool {
        self.kind() == GoalKind::RecurringExpenseStream
    }

    /// Reject values the engine is not defined for
    pub fn validate(&self) -> Result<(), PlannerError> {
        let numbers = [
            ("horizon_years", self.horizon_years),
            ("target_present_value", self.target_present_value),
            ("inflation_rate_pct", self.inflation_rate_pct),
            ("expected_return_pct", self.expected_return_pct),
            ("existing_savings", self.existing_savings),
            ("tax_rate_pct", self.tax_rate_pct),
            ("payout_years", self.payout_years),
            ("step_up_rate_pct", self.step_up_rate_pct.unwrap_or(0.0)),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(PlannerError::invalid_goal(&self.name, format!("{} is not a finite number", field)));
            }
        }

        let non_negative = [
            ("horizon_years", self.horizon_years),
            ("target_present_value", self.target_present_value),
            ("existing_savings", self.existing_savings),
            ("payout_years", self.payout_years),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(PlannerError::invalid_goal(&self.name, format!("{} must not be negative", field)));
            }
        }

        let rates = [
            ("inflation_rate_pct", self.inflation_rate_pct),
            ("expected_return_pct", self.expected_return_pct),
        ];
        for (field, value) in rates {
            if value <= -100.0 {
                return Err(PlannerError::invalid_goal(&self.name, format!("{} must be above -100", field)));
            }
        }

        if !(0.0..=100.0).contains(&self.tax_rate_pct) {
            return Err(PlannerError::invalid_goal(&self.name, "tax_rate_pct must be between 0 and 100"));
        }

        if let Some(step_up) = self.step_up_rate_pct {
            if !(0.0..=100.0).contains(&step_up) {
                return Err(PlannerError::invalid_goal(&self.name, "step_up_rate_pct must be between 0 and 100"));
            }
        }

        Ok(())
    }
}

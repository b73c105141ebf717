//! Renderer-ready report records
//!
//! The document layer only lays out strings; every amount here is already
//! formatted with Indian digit grouping.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlannerError;
use crate::format::format_indian_grouping;
use crate::plan::{AggregateResult, GoalResult};

/// One formatted row of the goal table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalReportRow {
    #[serde(rename = "Goal")]
    pub goal: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "FutureValueRequired")]
    pub future_value_required: String,
    #[serde(rename = "SavingsFutureValue")]
    pub existing_savings_future_value: String,
    #[serde(rename = "Deficit")]
    pub deficit: String,
    #[serde(rename = "Progress")]
    pub progress: String,
    #[serde(rename = "MonthlySIP")]
    pub monthly_sip: String,
    #[serde(rename = "StepUpSIP")]
    pub step_up_sip: String,
    #[serde(rename = "Lumpsum")]
    pub lumpsum: String,
}

impl GoalReportRow {
    pub fn from_result(result: &GoalResult) -> Self {
        Self {
            goal: result.name.clone(),
            category: result.category.as_str().to_string(),
            future_value_required: format_indian_grouping(&result.future_value_required),
            existing_savings_future_value: format_indian_grouping(&result.existing_savings_future_value),
            deficit: format_indian_grouping(&result.deficit),
            progress: format!("{}%", format_indian_grouping(&result.progress_pct)),
            monthly_sip: format_indian_grouping(&result.required_monthly_sip),
            step_up_sip: format_indian_grouping(&result.required_step_up_sip),
            lumpsum: format_indian_grouping(&result.required_lumpsum),
        }
    }

    /// Totals row; per-goal columns that do not add up are left blank
    fn totals(aggregate: &AggregateResult) -> Self {
        Self {
            goal: "Total".to_string(),
            category: String::new(),
            future_value_required: String::new(),
            existing_savings_future_value: String::new(),
            deficit: String::new(),
            progress: String::new(),
            monthly_sip: format_indian_grouping(&aggregate.total_monthly_sip),
            step_up_sip: format_indian_grouping(&aggregate.total_step_up_sip),
            lumpsum: format_indian_grouping(&aggregate.total_lumpsum),
        }
    }
}

/// Everything the investment sheet needs from the planning engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanReport {
    pub client_name: String,
    pub report_date: NaiveDate,
    pub rows: Vec<GoalReportRow>,
    pub totals: GoalReportRow,
    pub currency_prefix: String,
    total_monthly_sip: f64,
    total_lumpsum: f64,
}

impl PlanReport {
    pub fn build(client_name: &str, report_date: NaiveDate, aggregate: &AggregateResult) -> Self {
        Self {
            client_name: client_name.to_string(),
            report_date,
            rows: aggregate.goals.iter().map(GoalReportRow::from_result).collect(),
            totals: GoalReportRow::totals(aggregate),
            currency_prefix: "Rs.".to_string(),
            total_monthly_sip: aggregate.total_monthly_sip,
            total_lumpsum: aggregate.total_lumpsum,
        }
    }

    pub fn with_currency_prefix(mut self, prefix: &str) -> Self {
        self.currency_prefix = prefix.to_string();
        self
    }

    /// Date as printed on the sheet, e.g. "18-10-2026"
    pub fn formatted_date(&self) -> String {
        self.report_date.format("%d-%m-%Y").to_string()
    }

    /// "Rs. 1,00,000.00 (Lumpsum), Rs. 5,000.00 (SIP)"
    ///
    /// A zero total is left out; `None` when nothing needs investing.
    pub fn investment_summary(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.total_lumpsum > 0.0 {
            parts.push(format!("{} {} (Lumpsum)", self.currency_prefix, format_indian_grouping(&self.total_lumpsum)));
        }
        if self.total_monthly_sip > 0.0 {
            parts.push(format!("{} {} (SIP)", self.currency_prefix, format_indian_grouping(&self.total_monthly_sip)));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Write goal rows followed by the totals row as CSV
    pub fn write_csv_to<W: Write>(&self, writer: W) -> Result<(), PlannerError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in self.rows.iter().chain(std::iter::once(&self.totals)) {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), PlannerError> {
        let file = std::fs::File::create(path)?;
        self.write_csv_to(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::{GoalCategory, GoalSpec};
    use crate::plan::compute_all;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn sample_plan() -> AggregateResult {
        compute_all(&[
            GoalSpec::target("College", GoalCategory::Education, 13.0, 500_000.0, 8.0, 12.0),
            GoalSpec::target("Buffer", GoalCategory::EmergencyFund, 1.0, 100_000.0, 0.0, 0.0)
                .with_existing_savings(250_000.0),
        ])
    }

    #[test]
    fn test_rows_are_formatted_in_goal_order() {
        let report = PlanReport::build("R. Sharma", date(), &sample_plan());
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].goal, "College");
        assert_eq!(report.rows[1].category, "Emergency Fund");
        assert_eq!(report.rows[1].future_value_required, "1,00,000.00");
        assert_eq!(report.rows[1].deficit, "0.00");
        assert_eq!(report.rows[1].progress, "250.00%");
        assert_eq!(report.totals.goal, "Total");
        assert_eq!(report.formatted_date(), "18-10-2026");
    }

    #[test]
    fn test_investment_summary() {
        let plan = sample_plan();
        let report = PlanReport::build("R. Sharma", date(), &plan);
        let summary = report.investment_summary().unwrap();
        assert!(summary.starts_with("Rs. "));
        assert!(summary.contains("(Lumpsum), Rs. "));
        assert!(summary.ends_with("(SIP)"));

        let empty = PlanReport::build("R. Sharma", date(), &AggregateResult::default());
        assert_eq!(empty.investment_summary(), None);
    }

    #[test]
    fn test_write_csv() {
        let report = PlanReport::build("R. Sharma", date(), &sample_plan());
        let mut buffer = Vec::new();
        report.write_csv_to(&mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Goal,Category,FutureValueRequired"));
        assert!(lines[3].starts_with("Total,"));
    }
}

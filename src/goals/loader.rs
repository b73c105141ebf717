//! Load goal specifications from CSV exported by the planning form
//!
//! Form fields arrive as free text ("12,50,000", "Rs. 5,000", "8%", or blank when a
//! goal is not being pursued). This is the only place that text becomes numbers.

use super::{GoalCategory, GoalSpec};
use crate::error::PlannerError;
use csv::Reader;
use log::debug;
use std::path::Path;

/// Raw CSV row, one per goal on the form
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "HorizonYears")]
    horizon_years: String,
    #[serde(rename = "TargetPresentValue")]
    target_present_value: String,
    #[serde(rename = "InflationPct")]
    inflation_pct: String,
    #[serde(rename = "ExpectedReturnPct")]
    expected_return_pct: String,
    #[serde(rename = "ExistingSavings", default)]
    existing_savings: String,
    #[serde(rename = "TaxRatePct", default)]
    tax_rate_pct: String,
    #[serde(rename = "PayoutYears", default)]
    payout_years: String,
    #[serde(rename = "StepUpPct", default)]
    step_up_pct: String,
}

impl CsvRow {
    fn to_goal(self) -> Result<GoalSpec, PlannerError> {
        let category: GoalCategory = self.category.parse()?;
        let name = if self.name.trim().is_empty() {
            category.as_str().to_string()
        } else {
            self.name.trim().to_string()
        };

        let step_up_rate_pct = if self.step_up_pct.trim().is_empty() {
            None
        } else {
            Some(parse_field("StepUpPct", &self.step_up_pct, parse_percent)?)
        };

        let goal = GoalSpec {
            name,
            category,
            horizon_years: parse_field("HorizonYears", &self.horizon_years, parse_amount)?,
            target_present_value: parse_field("TargetPresentValue", &self.target_present_value, parse_amount)?,
            inflation_rate_pct: parse_field("InflationPct", &self.inflation_pct, parse_percent)?,
            expected_return_pct: parse_field("ExpectedReturnPct", &self.expected_return_pct, parse_percent)?,
            existing_savings: parse_field("ExistingSavings", &self.existing_savings, parse_amount)?,
            tax_rate_pct: parse_field("TaxRatePct", &self.tax_rate_pct, parse_percent)?,
            payout_years: parse_field("PayoutYears", &self.payout_years, parse_amount)?,
            step_up_rate_pct,
        };

        goal.validate()?;
        Ok(goal)
    }
}

/// Run a field parser, naming the column on failure
fn parse_field(
    field: &str,
    raw: &str,
    parser: fn(&str) -> Result<f64, PlannerError>,
) -> Result<f64, PlannerError> {
    parser(raw).map_err(|_| PlannerError::parse(field, raw))
}

/// Parse a currency or plain number typed into the form
///
/// Accepts an optional `Rs.`/`Rs`/`₹` prefix and `,` grouping in any position
/// (both "1,250,000" and "12,50,000"). A blank field is 0.
pub fn parse_amount(raw: &str) -> Result<f64, PlannerError> {
    let mut text = raw.trim();
    for prefix in ["Rs.", "Rs", "rs.", "rs", "RS.", "RS", "₹"] {
        if let Some(rest) = text.strip_prefix(prefix) {
            text = rest.trim_start();
            break;
        }
    }

    let cleaned: String = text.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return Ok(0.0);
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PlannerError::parse("amount", raw)),
    }
}

/// Parse a percentage such as "8", "8.5" or "8.5%"; blank is 0
pub fn parse_percent(raw: &str) -> Result<f64, PlannerError> {
    let text = raw.trim();
    let text = text.strip_suffix('%').unwrap_or(text);
    parse_amount(text).map_err(|_| PlannerError::parse("percent", raw))
}

/// Load all goals from a CSV file
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<GoalSpec>, PlannerError> {
    let path = path.as_ref();
    debug!("Loading goals from {}", path.display());
    let reader = Reader::from_path(path)?;
    read_goals(reader)
}

/// Load goals from any reader (e.g., string buffer, request body)
pub fn load_goals_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<GoalSpec>, PlannerError> {
    read_goals(Reader::from_reader(reader))
}

fn read_goals<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<GoalSpec>, PlannerError> {
    let mut goals = Vec::new();

    for (index, result) in reader.deserialize().enumerate() {
        let row_number = index + 1;
        let row: CsvRow = result.map_err(|e| PlannerError::from(e).at_row(row_number))?;
        let goal = row.to_goal().map_err(|e| e.at_row(row_number))?;
        goals.push(goal);
    }

    debug!("Loaded {} goals", goals.len());
    Ok(goals)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Name,Category,HorizonYears,TargetPresentValue,InflationPct,ExpectedReturnPct,ExistingSavings,TaxRatePct,PayoutYears,StepUpPct\n";

    #[test]
    fn test_parse_amount_variants() {
        assert_eq!(parse_amount("12,50,000").unwrap(), 1_250_000.0);
        assert_eq!(parse_amount("1,250,000.50").unwrap(), 1_250_000.5);
        assert_eq!(parse_amount("Rs. 5,000").unwrap(), 5_000.0);
        assert_eq!(parse_amount("₹2,00,000").unwrap(), 200_000.0);
        assert_eq!(parse_amount("  ").unwrap(), 0.0);
        assert_eq!(parse_amount("-300").unwrap(), -300.0);
        assert!(parse_amount("five lakh").is_err());
        assert!(parse_amount("inf").is_err());
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(parse_percent("8%").unwrap(), 8.0);
        assert_eq!(parse_percent(" 12.5 % ").unwrap(), 12.5);
        assert_eq!(parse_percent("").unwrap(), 0.0);
        assert!(parse_percent("eight").is_err());
    }

    #[test]
    fn test_load_goals_from_reader() {
        let data = format!(
            "{}{}{}",
            HEADER,
            "Aarav college,Education,13,\"5,00,000\",8,12,0,,,\n",
            "Retirement,Retirement Income,25,\"Rs. 40,000\",6%,11%,\"2,00,000\",20,25,5\n",
        );

        let goals = load_goals_from_reader(data.as_bytes()).expect("valid CSV");
        assert_eq!(goals.len(), 2);

        let education = &goals[0];
        assert_eq!(education.name, "Aarav college");
        assert_eq!(education.category, GoalCategory::Education);
        assert_eq!(education.target_present_value, 500_000.0);
        assert_eq!(education.step_up_rate_pct, None);
        assert_eq!(education.payout_years, 0.0);

        let retirement = &goals[1];
        assert!(retirement.is_recurring());
        assert_eq!(retirement.target_present_value, 40_000.0);
        assert_eq!(retirement.existing_savings, 200_000.0);
        assert_eq!(retirement.inflation_rate_pct, 6.0);
        assert_eq!(retirement.payout_years, 25.0);
        assert_eq!(retirement.step_up_rate_pct, Some(5.0));
    }

    #[test]
    fn test_blank_name_uses_category_label() {
        let data = format!("{}{}", HEADER, ",Emergency Fund,1,\"3,00,000\",6,7,,,,\n");
        let goals = load_goals_from_reader(data.as_bytes()).unwrap();
        assert_eq!(goals[0].name, "Emergency Fund");
    }

    #[test]
    fn test_bad_field_reports_row_and_column() {
        let data = format!(
            "{}{}{}",
            HEADER,
            "A,Education,10,100000,8,12,0,,,\n",
            "B,Education,ten,100000,8,12,0,,,\n",
        );
        let err = load_goals_from_reader(data.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("row 2:"), "{}", message);
        assert!(message.contains("HorizonYears"), "{}", message);
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let data = format!("{}{}", HEADER, "A,Education,10,100000,8,12,0,150,,\n");
        let err = load_goals_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::Row { row: 1, .. }));
    }

    #[test]
    fn test_step_up_above_hundred_rejected() {
        let data = format!("{}{}", HEADER, "A,Education,13,500000,8,12,0,,,150\n");
        let err = load_goals_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, PlannerError::Row { row: 1, .. }));
        assert!(err.to_string().contains("step_up_rate_pct"), "{}", err);
    }

    #[test]
    fn test_unknown_category() {
        let data = format!("{}{}", HEADER, "A,Holiday,10,100000,8,12,0,,,\n");
        assert!(load_goals_from_reader(data.as_bytes()).is_err());
    }
}

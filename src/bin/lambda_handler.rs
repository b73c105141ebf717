//! AWS Lambda handler for goal plans
//!
//! Accepts a client's goals as JSON and returns the computed plan together with the
//! formatted report rows. Supports Lambda Function URLs for direct HTTP access.

use chrono::{Local, NaiveDate};
use goal_planner::{AggregateResult, GoalPlanner, GoalSpec, PlanConfig, PlanReport};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Plan request posted by the form
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    #[serde(default)]
    pub client_name: String,

    /// Report date (default: today)
    #[serde(default)]
    pub report_date: Option<NaiveDate>,

    /// Step-up rate for goals that do not set one (default: 10%)
    #[serde(default)]
    pub step_up_rate_pct: Option<f64>,

    pub goals: Vec<GoalSpec>,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub aggregate: AggregateResult,
    pub report: PlanReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_summary: Option<String>,
    /// Goals left out of the plan (not pursued, or could not be calculated)
    pub excluded: Vec<String>,
    pub execution_time_ms: u64,
}

fn cors_builder(status: u16) -> lambda_http::http::response::Builder {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn error_response(status: u16, message: &str) -> Result<Response<Body>, Error> {
    let body = serde_json::json!({ "error": message }).to_string();
    Ok(cors_builder(status).body(Body::Text(body))?)
}

fn plan(request: PlanRequest) -> Result<PlanResponse, String> {
    plan_with_config(request, PlanConfig::from_env())
}

/// Apply request settings on top of `config` and compute the plan
fn plan_with_config(request: PlanRequest, mut config: PlanConfig) -> Result<PlanResponse, String> {
    let start = std::time::Instant::now();

    for goal in &request.goals {
        goal.validate().map_err(|e| e.to_string())?;
    }

    if !request.client_name.trim().is_empty() {
        config.client_name = request.client_name.trim().to_string();
    }
    if let Some(rate) = request.step_up_rate_pct {
        config.step_up_rate_pct = rate;
    }
    config.validate().map_err(|e| e.to_string())?;

    let report_date = request.report_date.unwrap_or_else(|| Local::now().date_naive());
    let planner = GoalPlanner::with_config(config);
    let aggregate = planner.run(&request.goals);
    let report = planner.report(&aggregate, report_date);

    Ok(PlanResponse {
        investment_summary: report.investment_summary(),
        excluded: aggregate.excluded.clone(),
        aggregate,
        report,
        execution_time_ms: start.elapsed().as_millis() as u64,
    })
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors_builder(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: PlanRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, &format!("Invalid JSON: {}", e)),
    };

    match plan(request) {
        Ok(response) => {
            let body = serde_json::to_string(&response)?;
            Ok(cors_builder(200).body(Body::Text(body))?)
        }
        Err(message) => error_response(400, &message),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_from_json() {
        let request: PlanRequest = serde_json::from_str(
            r#"{
                "client_name": "R. Sharma",
                "report_date": "2026-10-18",
                "goals": [
                    {"name": "College", "category": "Education", "horizon_years": 13,
                     "target_present_value": 500000, "inflation_rate_pct": 8, "expected_return_pct": 12},
                    {"name": "Wedding", "category": "Marriage", "horizon_years": 0,
                     "target_present_value": 1000000, "inflation_rate_pct": 7, "expected_return_pct": 11}
                ]
            }"#,
        )
        .unwrap();

        let response = plan(request).unwrap();
        assert_eq!(response.aggregate.goals.len(), 1);
        assert_eq!(response.aggregate.excluded, vec!["Wedding".to_string()]);
        assert_eq!(response.excluded, vec!["Wedding".to_string()]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["excluded"], serde_json::json!(["Wedding"]));
        assert_eq!(response.report.formatted_date(), "18-10-2026");
        assert!(response.investment_summary.is_some());
    }

    #[test]
    fn test_blank_client_name_keeps_configured_name() {
        let config = PlanConfig {
            client_name: "Configured Client".to_string(),
            ..Default::default()
        };

        let request: PlanRequest = serde_json::from_str(r#"{"client_name": "  ", "goals": []}"#).unwrap();
        let response = plan_with_config(request, config.clone()).unwrap();
        assert_eq!(response.report.client_name, "Configured Client");

        let request: PlanRequest = serde_json::from_str(r#"{"client_name": "R. Sharma", "goals": []}"#).unwrap();
        let response = plan_with_config(request, config).unwrap();
        assert_eq!(response.report.client_name, "R. Sharma");
    }

    #[test]
    fn test_invalid_goal_rejected() {
        let request: PlanRequest = serde_json::from_str(
            r#"{"goals": [{"name": "Bad", "category": "Education", "horizon_years": 5,
                "target_present_value": -1, "inflation_rate_pct": 8, "expected_return_pct": 12}]}"#,
        )
        .unwrap();
        let err = plan(request).unwrap_err();
        assert!(err.contains("target_present_value"));
    }
}

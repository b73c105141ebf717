//! Goal Planner CLI
//!
//! Reads goals exported from the planning form and prints the contribution plan

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;

use goal_planner::format::format_indian_grouping;
use goal_planner::goals::load_goals;
use goal_planner::{GoalPlanner, PlanConfig};

#[derive(Debug, Parser)]
#[command(name = "goal_planner", version, about = "Required SIP, step-up SIP and lumpsum per financial goal")]
struct Args {
    /// Goals CSV exported from the planning form
    #[arg(long)]
    goals: PathBuf,

    /// JSON config file (env vars and flags override it)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Client name printed on the sheet
    #[arg(long)]
    client: Option<String>,

    /// Step-up rate for goals that do not set one (percent)
    #[arg(long)]
    step_up: Option<f64>,

    /// Report date, YYYY-MM-DD (default: today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Write the formatted goal table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Evaluate goals in parallel
    #[arg(long)]
    parallel: bool,
}

fn load_config(args: &Args) -> Result<PlanConfig> {
    let base = match &args.config {
        Some(path) => PlanConfig::from_json_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PlanConfig::default(),
    };

    let mut config = base.with_env_overrides();
    if let Some(client) = &args.client {
        config.client_name = client.clone();
    }
    if let Some(rate) = args.step_up {
        config.step_up_rate_pct = rate;
    }
    if args.parallel {
        config.parallel = true;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(&args)?;

    let goals = load_goals(&args.goals)
        .with_context(|| format!("Failed to load goals from {}", args.goals.display()))?;
    let report_date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let planner = GoalPlanner::with_config(config);
    let plan = planner.run(&goals);
    let report = planner.report(&plan, report_date);

    if let Some(path) = &args.output {
        report
            .write_csv(path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Investment Sheet");
    println!("================\n");
    if !report.client_name.is_empty() {
        println!("Client Name: {}", report.client_name);
    }
    println!("Date: {}\n", report.formatted_date());

    println!("{:<24} {:>18} {:>18} {:>10} {:>14} {:>14} {:>16}",
        "Goal", "Required FV", "Deficit", "Progress", "SIP", "Step-up SIP", "Lumpsum");
    println!("{}", "-".repeat(120));

    for row in &report.rows {
        println!("{:<24} {:>18} {:>18} {:>10} {:>14} {:>14} {:>16}",
            row.goal,
            row.future_value_required,
            row.deficit,
            row.progress,
            row.monthly_sip,
            row.step_up_sip,
            row.lumpsum,
        );
    }

    println!("{}", "-".repeat(120));
    println!("{:<24} {:>18} {:>18} {:>10} {:>14} {:>14} {:>16}",
        "Total", "", "", "",
        report.totals.monthly_sip,
        report.totals.step_up_sip,
        report.totals.lumpsum,
    );

    if !plan.excluded.is_empty() {
        println!("\nNot pursued: {}", plan.excluded.join(", "));
    }

    let summary = plan.summary();
    println!("\nSummary:");
    println!("  Goals planned: {} ({} already funded)", summary.goal_count, summary.funded_goals);
    println!("  Total required at horizon: {}", format_indian_grouping(&summary.total_future_value_required));
    println!("  Total deficit: {}", format_indian_grouping(&summary.total_deficit));
    if let Some(line) = report.investment_summary() {
        println!("  Investment Amount: {}", line);
    }

    Ok(())
}

use super::{load_config, ReviewArgs};
use crate::planner::{has_scheduled_days, review_value};
use serde_json::Value;
use tracing::{error, info};

pub fn execute(args: ReviewArgs) -> anyhow::Result<()> {
    let config = load_config(&args.config)?;
    let content = std::fs::read_to_string(&args.file)?;
    let document: Value = serde_json::from_str(&content)?;

    // Accept a full `generate` response or just its weekly plan
    let plan = document
        .pointer("/data/weekly_plan")
        .or_else(|| document.get("weekly_plan"))
        .unwrap_or(&document);

    let expect_filled = match document.pointer("/data/matched_topics") {
        Some(Value::Array(topics)) => !topics.is_empty(),
        _ => has_scheduled_days(plan, &config.calendar),
    };
    info!("Reviewing {:?} (expect filled days: {})", args.file, expect_filled);

    let result = review_value(plan, &config.calendar, expect_filled);
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.passed {
        error!("Plan is incomplete: {} missing", result.missing.len());
        std::process::exit(1);
    }

    Ok(())
}

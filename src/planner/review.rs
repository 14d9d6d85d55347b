//! Structural checks on an assembled plan
//!
//! Review never changes content. It answers one question: does the plan have
//! every week key, is every week a day map, and, when topics were matched, is
//! every day filled with an activity?

use crate::config::CalendarConfig;
use serde::Serialize;
use serde_json::Value;

use super::types::WeeklyPlan;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewResult {
    pub passed: bool,
    /// Missing keys: `"week2"` for a week, `"week2.Monday"` for a day
    pub missing: Vec<String>,
    pub weeks_checked: usize,
    pub days_filled: usize,
}

/// Review a plan exactly as it will be serialized for the caller
pub fn review_plan(plan: &WeeklyPlan, calendar: &CalendarConfig, expect_filled: bool) -> ReviewResult {
    match serde_json::to_value(plan) {
        Ok(value) => review_value(&value, calendar, expect_filled),
        Err(e) => ReviewResult {
            passed: false,
            missing: vec![format!("<unserializable plan: {}>", e)],
            weeks_checked: 0,
            days_filled: 0,
        },
    }
}

pub fn review_value(plan: &Value, calendar: &CalendarConfig, expect_filled: bool) -> ReviewResult {
    let mut missing = Vec::new();
    let mut weeks_checked = 0;
    let mut days_filled = 0;

    for week in &calendar.weeks {
        let days = match plan.get(week).and_then(Value::as_object) {
            Some(days) => days,
            None => {
                missing.push(week.clone());
                continue;
            }
        };
        weeks_checked += 1;

        for day in &calendar.days {
            if days.get(day).map(is_activity).unwrap_or(false) {
                days_filled += 1;
            } else if expect_filled {
                missing.push(format!("{}.{}", week, day));
            }
        }
    }

    ReviewResult {
        passed: missing.is_empty(),
        missing,
        weeks_checked,
        days_filled,
    }
}

/// Whether a plan value holds any scheduled day at all
pub fn has_scheduled_days(plan: &Value, calendar: &CalendarConfig) -> bool {
    calendar.weeks.iter().any(|week| {
        plan.get(week)
            .and_then(Value::as_object)
            .map(|days| !days.is_empty())
            .unwrap_or(false)
    })
}

fn is_activity(value: &Value) -> bool {
    value
        .get("activity")
        .and_then(Value::as_str)
        .map(|s| !s.trim().is_empty())
        .unwrap_or(false)
}

use crate::catalog::{ChildProfile, Topic};
use crate::error::OutputError;
use crate::planner::{PlanOutcome, ReviewResult, WeeklyPlan};
use crate::selector::SelectionSource;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// The envelope an API layer returns for a plan request
#[derive(Debug, Serialize)]
pub struct PlanResponse<'a> {
    pub success: bool,
    pub data: PlanData<'a>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct PlanData<'a> {
    pub plan_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub child_profile: &'a ChildProfile,
    pub eligible_count: usize,
    pub matched_topics: &'a [Topic],
    pub selection_source: &'a SelectionSource,
    pub weekly_plan: &'a WeeklyPlan,
    pub review: &'a ReviewResult,
}

impl<'a> PlanResponse<'a> {
    pub fn from_outcome(outcome: &'a PlanOutcome) -> Self {
        let message = if outcome.matched_topics.is_empty() {
            "No matching topics found".to_string()
        } else {
            format!(
                "Generated a 4-week plan from {} topics",
                outcome.matched_topics.len()
            )
        };

        Self {
            success: true,
            data: PlanData {
                plan_id: outcome.plan_id,
                generated_at: Utc::now(),
                child_profile: &outcome.child_profile,
                eligible_count: outcome.eligible_count,
                matched_topics: &outcome.matched_topics,
                selection_source: &outcome.selection_source,
                weekly_plan: &outcome.weekly_plan,
                review: &outcome.review,
            },
            message,
        }
    }

    pub fn to_json(&self) -> Result<String, OutputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

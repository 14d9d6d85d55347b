//! One plan run: profile -> eligible -> selected -> assembled -> reviewed

use crate::catalog::{Catalog, ChildProfile, Topic};
use crate::config::{CalendarConfig, Config};
use crate::error::PipelineError;
use crate::matching::eligible_topics;
use crate::provider::Runner;
use crate::selector::{SelectionSource, TopicSelector};
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::assembler::assemble_plan;
use super::review::{review_plan, ReviewResult};
use super::types::WeeklyPlan;

/// Stages of a run. Runs only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineStage {
    Pending,
    EligibleComputed,
    TopicsSelected,
    PlanAssembled,
    Reviewed,
}

impl PipelineStage {
    pub fn next(self) -> Option<Self> {
        match self {
            PipelineStage::Pending => Some(PipelineStage::EligibleComputed),
            PipelineStage::EligibleComputed => Some(PipelineStage::TopicsSelected),
            PipelineStage::TopicsSelected => Some(PipelineStage::PlanAssembled),
            PipelineStage::PlanAssembled => Some(PipelineStage::Reviewed),
            PipelineStage::Reviewed => None,
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.next() {
            debug!("Pipeline stage {:?} -> {:?}", self, next);
            *self = next;
        }
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub plan_id: Uuid,
    pub child_profile: ChildProfile,
    pub eligible_count: usize,
    pub matched_topics: Vec<Topic>,
    pub selection_source: SelectionSource,
    pub weekly_plan: WeeklyPlan,
    pub review: ReviewResult,
    pub stage: PipelineStage,
}

pub struct Pipeline {
    catalog: Arc<Catalog>,
    calendar: CalendarConfig,
    selector: TopicSelector,
}

impl Pipeline {
    pub fn new(config: &Config, catalog: Arc<Catalog>, runner: Option<Arc<dyn Runner>>) -> Self {
        Self::with_selector(config, catalog, TopicSelector::new(runner, config))
    }

    pub fn with_selector(config: &Config, catalog: Arc<Catalog>, selector: TopicSelector) -> Self {
        Self {
            catalog,
            calendar: config.calendar.clone(),
            selector,
        }
    }

    /// Run every stage for one child.
    ///
    /// Data problems (no eligible topics, ranking failure, odd catalog rows)
    /// degrade to a smaller plan. Only a structurally incomplete plan is an error.
    pub async fn run<R: Rng + ?Sized>(
        &self,
        profile: &ChildProfile,
        rng: &mut R,
    ) -> Result<PlanOutcome, PipelineError> {
        let mut stage = PipelineStage::Pending;

        let eligible = eligible_topics(self.catalog.topics(), profile);
        stage.advance();
        info!(
            "{} of {} topics eligible for age {}",
            eligible.len(),
            self.catalog.len(),
            profile.age
        );

        let selection = self.selector.select(&eligible, profile, rng).await;
        stage.advance();
        info!(
            "Selected {} topics ({:?})",
            selection.topics.len(),
            selection.source
        );

        let weekly_plan = assemble_plan(&selection.topics, profile, &self.calendar);
        stage.advance();

        let review = review_plan(&weekly_plan, &self.calendar, !selection.topics.is_empty());
        if !review.passed {
            warn!("Plan review failed: missing {:?}", review.missing);
            return Err(PipelineError::IncompletePlan {
                missing: review.missing,
            });
        }
        stage.advance();

        Ok(PlanOutcome {
            plan_id: Uuid::new_v4(),
            child_profile: profile.clone(),
            eligible_count: eligible.len(),
            matched_topics: selection.topics,
            selection_source: selection.source,
            weekly_plan,
            review,
            stage,
        })
    }
}

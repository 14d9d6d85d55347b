//! Plan building: calendar assembly, day activities, review, and the run pipeline

pub mod activity;
pub mod assembler;
pub mod pipeline;
pub mod review;
pub mod types;

pub use assembler::assemble_plan;
pub use pipeline::{Pipeline, PipelineStage, PlanOutcome};
pub use review::{has_scheduled_days, review_value, ReviewResult};
pub use types::{ActivityKind, DayActivity, ScheduledDay, WeekPlan, WeeklyPlan};

//! Turning a topic into a day's activity

use crate::catalog::{ChildProfile, Topic};

use super::types::{ActivityKind, DayActivity};

pub const MAX_MATERIALS: usize = 5;
pub const DEFAULT_MATERIALS: [&str; 3] = ["Basic materials", "Paper", "Pencils"];

const MATERIALS_MARKER: &str = "Materials Needed:";
const STEPS_MARKER: &str = "Steps to Follow:";

const DEFAULT_DURATION: &str = "30 min";
const PRACTICE_DURATION: &str = "30 min";
const PRIMARY_DIFFICULTY: &str = "Beginner";
const PRACTICE_DIFFICULTY: &str = "Intermediate";

/// The day a topic is introduced
pub fn primary_activity(topic: &Topic, profile: &ChildProfile) -> DayActivity {
    let activity = topic
        .activity_1
        .clone()
        .or_else(|| topic.activity_2.clone())
        .unwrap_or_else(|| format!("Explore {}", topic.topic));
    let materials_needed = extract_materials(&activity);

    DayActivity {
        activity,
        duration: topic
            .estimated_time
            .clone()
            .unwrap_or_else(|| DEFAULT_DURATION.to_string()),
        topic: topic.topic.clone(),
        niche: topic.niche.clone(),
        objective: objective(topic),
        materials_needed,
        difficulty: PRIMARY_DIFFICULTY.to_string(),
        age_appropriate: age_appropriate(topic, profile),
        kind: ActivityKind::Primary,
        topic_id: topic.id.clone(),
        explanation: topic.explanation.clone(),
    }
}

/// A follow-up day that revisits an already scheduled topic
pub fn practice_activity(topic: &Topic, profile: &ChildProfile) -> DayActivity {
    let source = topic
        .activity_2
        .as_deref()
        .or(topic.activity_1.as_deref())
        .unwrap_or("review what you learned");

    DayActivity {
        activity: format!("Practice and apply {}: {}", topic.topic, source),
        duration: PRACTICE_DURATION.to_string(),
        topic: topic.topic.clone(),
        niche: topic.niche.clone(),
        objective: objective(topic),
        materials_needed: extract_materials(source),
        difficulty: PRACTICE_DIFFICULTY.to_string(),
        age_appropriate: age_appropriate(topic, profile),
        kind: ActivityKind::Practice,
        topic_id: topic.id.clone(),
        explanation: topic.explanation.clone(),
    }
}

/// Pull the "Materials Needed:" list out of an activity description.
///
/// The section runs until "Steps to Follow:" or the end of the text. Returns
/// the generic list when there is no marker or the section is empty.
pub fn extract_materials(text: &str) -> Vec<String> {
    let section = match text.find(MATERIALS_MARKER) {
        Some(start) => &text[start + MATERIALS_MARKER.len()..],
        None => return default_materials(),
    };
    let section = match section.find(STEPS_MARKER) {
        Some(end) => &section[..end],
        None => section,
    };

    let materials: Vec<String> = section
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .take(MAX_MATERIALS)
        .map(str::to_string)
        .collect();

    if materials.is_empty() {
        default_materials()
    } else {
        materials
    }
}

fn default_materials() -> Vec<String> {
    DEFAULT_MATERIALS.iter().map(|m| m.to_string()).collect()
}

fn objective(topic: &Topic) -> String {
    topic
        .objective
        .clone()
        .unwrap_or_else(|| format!("Learn about {}", topic.topic))
}

fn age_appropriate(topic: &Topic, profile: &ChildProfile) -> String {
    if topic.age_spec.is_empty() {
        profile.age.to_string()
    } else {
        topic.age_spec.clone()
    }
}

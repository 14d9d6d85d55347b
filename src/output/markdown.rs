use crate::planner::{ActivityKind, PlanOutcome};
use crate::selector::SelectionSource;

/// Human-readable rendering of a plan
pub fn render_markdown(outcome: &PlanOutcome) -> String {
    let profile = &outcome.child_profile;
    let mut content = String::new();

    let title = if profile.name.is_empty() {
        format!("# Learning Plan (age {})\n\n", profile.age)
    } else {
        format!("# Learning Plan for {} (age {})\n\n", profile.name, profile.age)
    };
    content.push_str(&title);

    content.push_str("| Metric | Value |\n");
    content.push_str("|--------|-------|\n");
    content.push_str(&format!("| Plan | `{}` |\n", outcome.plan_id));
    let interests: Vec<&str> = profile.interests.iter().map(String::as_str).collect();
    content.push_str(&format!("| Interests | {} |\n", interests.join(", ")));
    content.push_str(&format!("| Eligible Topics | {} |\n", outcome.eligible_count));
    content.push_str(&format!(
        "| Matched Topics | {} |\n",
        outcome.matched_topics.len()
    ));
    content.push_str(&format!(
        "| Selection | {} |\n",
        format_source(&outcome.selection_source)
    ));
    content.push_str("\n---\n\n");

    if outcome.weekly_plan.is_empty() {
        content.push_str("*No matching topics found*\n");
        return content;
    }

    for week in &outcome.weekly_plan.weeks {
        content.push_str(&format!(
            "## {} ({} new topics)\n\n",
            week.label, week.topic_count
        ));
        for scheduled in &week.days {
            let activity = &scheduled.activity;
            let marker = match activity.kind {
                ActivityKind::Primary => "",
                ActivityKind::Practice => " *(practice)*",
            };
            content.push_str(&format!(
                "- **{}**: {}{} ({}, {})\n",
                scheduled.day, activity.topic, marker, activity.duration, activity.difficulty
            ));
            content.push_str(&format!(
                "  - Materials: {}\n",
                activity.materials_needed.join(", ")
            ));
        }
        content.push('\n');
    }

    content
}

fn format_source(source: &SelectionSource) -> String {
    match source {
        SelectionSource::Empty => "none eligible".to_string(),
        SelectionSource::Ranked => "ranked".to_string(),
        SelectionSource::Fallback { reason } => format!("random fallback ({})", reason),
    }
}

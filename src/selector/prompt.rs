use crate::catalog::{ChildProfile, Topic};

const SELECT_TOPICS_PROMPT: &str = include_str!("../../prompts/select_topics.md");

/// Fill the embedded ranking prompt for one child and their eligible topics
pub fn build_prompt(eligible: &[Topic], profile: &ChildProfile, count: usize) -> String {
    let topic_list = eligible
        .iter()
        .enumerate()
        .map(|(i, t)| {
            format!(
                "{}. {} (Niche: {}, Age: {})",
                i + 1,
                t.topic,
                t.niche,
                t.age_spec
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    SELECT_TOPICS_PROMPT
        .replace("{{PROFILE}}", &describe_profile(profile))
        .replace("{{TOPICS}}", &topic_list)
        .replace("{{COUNT}}", &count.to_string())
}

fn describe_profile(profile: &ChildProfile) -> String {
    let mut lines = vec![format!("- Age: {}", profile.age)];

    let interests: Vec<&str> = profile.interests.iter().map(String::as_str).collect();
    lines.push(format!("- Interests: {}", interests.join(", ")));

    if !profile.name.is_empty() {
        lines.push(format!("- Name: {}", profile.name));
    }
    if !profile.learning_style.is_empty() {
        lines.push(format!("- Learning style: {}", profile.learning_style));
    }
    if !profile.plan_type.is_empty() {
        lines.push(format!("- Plan type: {}", profile.plan_type));
    }

    lines.join("\n")
}

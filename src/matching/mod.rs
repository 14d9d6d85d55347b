mod age;

pub use age::parse_age_range;

use crate::catalog::{ChildProfile, Topic};
use tracing::debug;

/// Topics whose age spec covers the child's age and whose niche is one of the child's interests
pub fn eligible_topics(catalog: &[Topic], profile: &ChildProfile) -> Vec<Topic> {
    let eligible: Vec<Topic> = catalog
        .iter()
        .filter(|t| profile.is_interested_in(&t.niche))
        .filter(|t| parse_age_range(&t.age_spec).contains(&profile.age))
        .cloned()
        .collect();

    debug!(
        age = profile.age,
        interests = ?profile.interests,
        eligible = eligible.len(),
        catalog = catalog.len(),
        "Filtered catalog"
    );

    eligible
}

use serde::Serialize;
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

const NICHE_KEYS: &[&str] = &["Niche", "niche"];
const TOPIC_KEYS: &[&str] = &["Topic", "topic", "Topic Name", "topic_name"];
const AGE_KEYS: &[&str] = &["Age", "age", "Age Range", "age_range"];
const TIME_KEYS: &[&str] = &["Estimated Time", "estimated_time", "Duration", "duration"];
const ACTIVITY_1_KEYS: &[&str] = &["Activity 1", "activity_1", "Activity1"];
const ACTIVITY_2_KEYS: &[&str] = &["Activity 2", "activity_2", "Activity2"];
const OBJECTIVE_KEYS: &[&str] = &["Objective", "objective"];
const EXPLANATION_KEYS: &[&str] = &["Explanation", "explanation"];
const HASHTAG_KEYS: &[&str] = &["Hashtags", "hashtags"];
const ID_KEYS: &[&str] = &["#", "id", "ID"];

pub const UNTITLED_TOPIC: &str = "Untitled topic";

/// One catalog entry, with every field already resolved from the raw row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: String,
    pub niche: String,
    pub topic: String,
    /// Raw age text as written in the catalog, e.g. "5-7" or "5 and 7"
    pub age_spec: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,
}

impl Topic {
    /// Normalize a raw catalog row.
    ///
    /// Spreadsheet exports disagree on key spelling ("Activity 1" vs
    /// "activity_1"), so every field is looked up through an ordered alias
    /// list. Missing fields stay `None` and get defaults when an activity is
    /// built from the topic.
    pub fn from_row(row: &Map<String, Value>) -> Self {
        let niche = coalesce(row, NICHE_KEYS).unwrap_or_default();
        let topic = coalesce(row, TOPIC_KEYS).unwrap_or_else(|| UNTITLED_TOPIC.to_string());
        let id = coalesce(row, ID_KEYS).unwrap_or_else(|| fingerprint(&niche, &topic));

        Self {
            id,
            niche,
            topic,
            age_spec: coalesce(row, AGE_KEYS).unwrap_or_default(),
            objective: coalesce(row, OBJECTIVE_KEYS),
            explanation: coalesce(row, EXPLANATION_KEYS),
            estimated_time: coalesce(row, TIME_KEYS),
            activity_1: coalesce(row, ACTIVITY_1_KEYS),
            activity_2: coalesce(row, ACTIVITY_2_KEYS),
            hashtags: coalesce(row, HASHTAG_KEYS),
        }
    }
}

/// First non-blank value among `keys`, stringified
fn coalesce(row: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| row.get(*key))
        .find_map(value_to_text)
}

fn value_to_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Stable id for rows without a "#" column
fn fingerprint(niche: &str, topic: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{}|{}", niche, topic).as_bytes());
    let digest = hasher.finalize();
    digest
        .iter()
        .take(6)
        .map(|b| format!("{:02x}", b))
        .collect()
}

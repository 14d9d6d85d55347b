use crate::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// The child a plan is generated for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildProfile {
    #[serde(alias = "child_age")]
    pub age: u32,

    #[serde(default, deserialize_with = "deserialize_interests")]
    pub interests: BTreeSet<String>,

    #[serde(default, alias = "child_name")]
    pub name: String,

    #[serde(default)]
    pub learning_style: String,

    #[serde(default)]
    pub plan_type: String,
}

impl ChildProfile {
    pub fn new<I, S>(age: u32, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            age,
            interests: clean_interests(interests),
            name: String::new(),
            learning_style: String::new(),
            plan_type: String::new(),
        }
    }

    /// Load a profile record from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn is_interested_in(&self, niche: &str) -> bool {
        self.interests.contains(niche.trim())
    }
}

fn clean_interests<I, S>(interests: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    interests
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn deserialize_interests<'de, D>(deserializer: D) -> Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<String>::deserialize(deserializer)?;
    Ok(clean_interests(raw))
}

//! Topic catalog and child profile inputs
//!
//! The catalog is exported by spreadsheet-sync tooling as JSON. It is loaded
//! once, normalized row by row, and never mutated afterwards.

mod profile;
mod topic;

pub use profile::ChildProfile;
pub use topic::Topic;

use crate::error::CatalogError;
use serde_json::Value;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    topics: Vec<Topic>,
}

impl Catalog {
    /// Load a catalog snapshot from a JSON file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog = Self::from_value(&value)?;
        info!("Loaded {} topics from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Accepts `[row, ...]` or `{"topics": [row, ...]}`
    pub fn from_value(value: &Value) -> Result<Self, CatalogError> {
        let rows = match value {
            Value::Array(rows) => rows,
            Value::Object(obj) => obj
                .get("topics")
                .and_then(|v| v.as_array())
                .ok_or(CatalogError::UnexpectedShape)?,
            _ => return Err(CatalogError::UnexpectedShape),
        };

        let mut topics = Vec::with_capacity(rows.len());
        for (idx, row) in rows.iter().enumerate() {
            match row.as_object() {
                Some(obj) => topics.push(Topic::from_row(obj)),
                None => warn!("Skipping catalog row {}: not an object", idx),
            }
        }

        Ok(Self { topics })
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_array() {
        let value = json!([
            {"Niche": "AI", "Topic": "Robots", "Age": "5-7"},
            {"Niche": "Dance", "Topic": "Ballet", "Age": "4"}
        ]);
        let catalog = Catalog::from_value(&value).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.topics()[1].topic, "Ballet");
    }

    #[test]
    fn test_from_wrapped_object() {
        let value = json!({"topics": [{"Niche": "AI", "Topic": "Robots"}]});
        let catalog = Catalog::from_value(&value).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_skips_non_object_rows() {
        let value = json!([{"Niche": "AI", "Topic": "Robots"}, "junk", 42, null]);
        let catalog = Catalog::from_value(&value).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_rejects_scalar_document() {
        assert!(matches!(
            Catalog::from_value(&json!("nope")),
            Err(CatalogError::UnexpectedShape)
        ));
        assert!(matches!(
            Catalog::from_value(&json!({"rows": []})),
            Err(CatalogError::UnexpectedShape)
        ));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("topics.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Catalog::load(&path),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        assert!(matches!(
            Catalog::load(&path),
            Err(CatalogError::ReadFile { .. })
        ));
    }
}

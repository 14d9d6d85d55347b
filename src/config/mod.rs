mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::collections::HashSet;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            catalog: default_catalog(),
            topics_per_plan: default_topics_per_plan(),
            seed: None,
            ranking: RankingConfig::default(),
            providers: ProvidersConfig::default(),
            retry: RetryConfig::default(),
            calendar: CalendarConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_labels("week", &self.calendar.weeks, WEEKS_PER_PLAN)?;
        check_labels("day", &self.calendar.days, DAYS_PER_WEEK)?;

        if self.topics_per_plan == 0 {
            return Err(ConfigError::ZeroTopics);
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.retry.max_attempts > MAX_RANKING_ATTEMPTS {
            return Err(ConfigError::TooManyAttempts {
                max: MAX_RANKING_ATTEMPTS,
                actual: self.retry.max_attempts,
            });
        }
        if self.ranking.timeout_sec == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(())
    }
}

fn check_labels(kind: &'static str, labels: &[String], expected: usize) -> Result<(), ConfigError> {
    if labels.len() != expected {
        return Err(ConfigError::LabelCount {
            kind,
            expected,
            actual: labels.len(),
        });
    }

    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label.as_str()) {
            return Err(ConfigError::DuplicateLabel {
                kind,
                label: label.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.calendar.weeks, vec!["week1", "week2", "week3", "week4"]);
        assert_eq!(config.calendar.days.len(), 7);
        assert_eq!(config.calendar.days[0], "Monday");
        assert_eq!(config.topics_per_plan, 4);
        assert_eq!(config.retry.max_attempts, 2);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
catalog: topics.json
seed: 7
ranking:
  provider: offline
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.catalog, std::path::PathBuf::from("topics.json"));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.ranking.provider, Provider::Offline);
        assert_eq!(config.ranking.timeout_sec, 30);
        assert_eq!(config.calendar.weeks.len(), 4);
    }

    #[test]
    fn test_rejects_wrong_week_count() {
        let mut config = Config::default();
        config.calendar.weeks.pop();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::LabelCount {
                kind: "week",
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_rejects_duplicate_day() {
        let mut config = Config::default();
        config.calendar.days[6] = "Monday".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateLabel { kind: "day", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_attempts() {
        let mut config = Config::default();
        config.retry.max_attempts = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroAttempts)));
    }

    #[test]
    fn test_rejects_more_than_one_retry() {
        let mut config = Config::default();
        config.retry.max_attempts = 10;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyAttempts { max: 2, actual: 10 })
        ));

        config.retry.max_attempts = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default();
        config.ranking.timeout_sec = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
    }
}

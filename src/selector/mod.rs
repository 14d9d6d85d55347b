//! Topic selection: ask a ranking model for the best topics, sample when it can't answer
//!
//! The ranking call is the only external dependency in a plan run. It is
//! bounded by a per-attempt timeout and a small retry budget; whatever goes
//! wrong, `select` still returns `min(count, eligible)` topics.

mod prompt;

use crate::catalog::{ChildProfile, Topic};
use crate::config::{Config, RetryConfig};
use crate::error::{ProviderError, SelectionError};
use crate::parser::extract_json;
use crate::provider::{retry_with_backoff, Runner};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout as tokio_timeout;
use tracing::{debug, info, warn};

pub use prompt::build_prompt;

/// Which path produced a selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectionSource {
    /// Nothing was eligible; the ranking model was not called
    Empty,
    Ranked,
    Fallback { reason: String },
}

#[derive(Debug, Clone)]
pub struct Selection {
    pub topics: Vec<Topic>,
    pub source: SelectionSource,
}

pub struct TopicSelector {
    runner: Option<Arc<dyn Runner>>,
    retry: RetryConfig,
    timeout: Duration,
    count: usize,
}

impl TopicSelector {
    pub fn new(runner: Option<Arc<dyn Runner>>, config: &Config) -> Self {
        Self {
            runner,
            retry: config.retry.clone(),
            timeout: Duration::from_secs(config.ranking.timeout_sec),
            count: config.topics_per_plan,
        }
    }

    #[cfg(test)]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Pick up to `count` topics from `eligible`, best first
    pub async fn select<R: Rng + ?Sized>(
        &self,
        eligible: &[Topic],
        profile: &ChildProfile,
        rng: &mut R,
    ) -> Selection {
        if eligible.is_empty() {
            debug!("No eligible topics, skipping ranking");
            return Selection {
                topics: Vec::new(),
                source: SelectionSource::Empty,
            };
        }

        let count = self.count.min(eligible.len());
        let ranked = self.rank(eligible, profile, count).await;
        resolve_selection(ranked, eligible, count, rng)
    }

    async fn rank(
        &self,
        eligible: &[Topic],
        profile: &ChildProfile,
        count: usize,
    ) -> Result<Vec<Topic>, SelectionError> {
        let runner = self.runner.as_ref().ok_or(SelectionError::Unavailable)?;
        let prompt = build_prompt(eligible, profile, count);
        let prompt = prompt.as_str();
        let timeout = self.timeout;

        info!(
            "Ranking {} eligible topics with {}",
            eligible.len(),
            runner.name()
        );

        retry_with_backoff(&self.retry, "topic ranking", |attempt| {
            rank_once(runner.as_ref(), prompt, timeout, eligible, attempt)
        })
        .await
    }
}

async fn rank_once(
    runner: &dyn Runner,
    prompt: &str,
    timeout: Duration,
    eligible: &[Topic],
    attempt: u32,
) -> Result<Vec<Topic>, SelectionError> {
    debug!("Ranking attempt {}", attempt);

    // Outer bound holds even for runners that ignore their timeout argument
    let output = tokio_timeout(timeout, runner.execute(prompt, timeout))
        .await
        .map_err(|_| ProviderError::Timeout(timeout))??;

    debug!(
        "Ranking answered in {:?} (exit {})",
        output.duration, output.exit_code
    );
    if !output.stderr.trim().is_empty() {
        debug!("Ranking stderr: {}", output.stderr.trim());
    }
    parse_ranking(&output.stdout, eligible)
}

/// One entry of the ranking model's answer
#[derive(Debug, Deserialize)]
struct RankedTopic {
    #[serde(rename = "Topic", alias = "topic")]
    topic: String,
    #[serde(default, rename = "Niche", alias = "niche")]
    niche: Option<String>,
}

/// Map the model's answer back onto eligible topics, in the model's order
pub fn parse_ranking(raw: &str, eligible: &[Topic]) -> Result<Vec<Topic>, SelectionError> {
    let value = extract_json(raw).ok_or(SelectionError::NoJson)?;

    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove("topics") {
            Some(Value::Array(items)) => items,
            _ => return Err(SelectionError::NotAnArray),
        },
        _ => return Err(SelectionError::NotAnArray),
    };

    let mut chosen: Vec<Topic> = Vec::new();
    for item in items {
        let ranked: RankedTopic = match serde_json::from_value(item) {
            Ok(r) => r,
            Err(e) => {
                debug!("Ignoring malformed ranking entry: {}", e);
                continue;
            }
        };

        let name = ranked.topic.trim();
        let found = eligible.iter().find(|t| {
            t.topic.eq_ignore_ascii_case(name)
                && ranked
                    .niche
                    .as_deref()
                    .map(|n| t.niche.eq_ignore_ascii_case(n.trim()))
                    .unwrap_or(true)
                && !chosen.contains(t)
        });

        match found {
            Some(topic) => chosen.push(topic.clone()),
            None => debug!("Ranking named unknown or repeated topic '{}'", name),
        }
    }

    if chosen.is_empty() {
        return Err(SelectionError::EmptySelection);
    }

    Ok(chosen)
}

/// Turn a ranking result into a final selection of exactly `count` topics.
///
/// A ranked answer is truncated, and topped up with random eligible topics if
/// it came back short. Any error means a uniform random sample.
pub fn resolve_selection<R: Rng + ?Sized>(
    ranked: Result<Vec<Topic>, SelectionError>,
    eligible: &[Topic],
    count: usize,
    rng: &mut R,
) -> Selection {
    let count = count.min(eligible.len());

    match ranked {
        Ok(mut topics) => {
            topics.truncate(count);
            if topics.len() < count {
                let remaining: Vec<&Topic> =
                    eligible.iter().filter(|t| !topics.contains(t)).collect();
                let missing = count - topics.len();
                debug!("Ranking returned {} topics, sampling {} more", topics.len(), missing);
                topics.extend(
                    remaining
                        .choose_multiple(rng, missing)
                        .map(|t| (*t).clone()),
                );
            }
            Selection {
                topics,
                source: SelectionSource::Ranked,
            }
        }
        Err(e) => {
            warn!("Topic ranking unavailable, sampling at random: {}", e);
            Selection {
                topics: eligible.choose_multiple(rng, count).cloned().collect(),
                source: SelectionSource::Fallback {
                    reason: e.to_string(),
                },
            }
        }
    }
}

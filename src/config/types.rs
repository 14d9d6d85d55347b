use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

pub const WEEKS_PER_PLAN: usize = 4;
pub const DAYS_PER_WEEK: usize = 7;
/// First call plus one retry
pub const MAX_RANKING_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Topic catalog JSON file
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,

    /// How many topics the selector picks for one plan
    #[serde(default = "default_topics_per_plan")]
    pub topics_per_plan: usize,

    /// Seed for fallback sampling; entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub ranking: RankingConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub retry: RetryConfig,

    #[serde(default)]
    pub calendar: CalendarConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct RankingConfig {
    #[serde(default = "default_provider")]
    pub provider: Provider,

    /// Per-attempt limit for the ranking call
    #[serde(default = "default_timeout_sec")]
    pub timeout_sec: u64,

    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            timeout_sec: default_timeout_sec(),
            working_dir: default_working_dir(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub claude_cli: ClaudeCliConfig,

    #[serde(default)]
    pub codex_cli: CodexCliConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ClaudeCliConfig {
    #[serde(default = "default_claude_binary")]
    pub binary: PathBuf,

    #[serde(default = "default_claude_model")]
    pub model: String,
}

impl Default for ClaudeCliConfig {
    fn default() -> Self {
        Self {
            binary: default_claude_binary(),
            model: default_claude_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CodexCliConfig {
    #[serde(default = "default_codex_binary")]
    pub binary: PathBuf,

    #[serde(default = "default_codex_model")]
    pub model: String,
}

impl Default for CodexCliConfig {
    fn default() -> Self {
        Self {
            binary: default_codex_binary(),
            model: default_codex_model(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct RetryConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_base_ms: default_backoff_base_ms(),
        }
    }
}

/// Week and day labels, in plan order
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct CalendarConfig {
    #[serde(default = "default_week_labels")]
    pub weeks: Vec<String>,

    #[serde(default = "default_day_labels")]
    pub days: Vec<String>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            weeks: default_week_labels(),
            days: default_day_labels(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    ClaudeCli,
    CodexCli,
    /// No ranking capability; always sample
    Offline,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::ClaudeCli => write!(f, "claude_cli"),
            Provider::CodexCli => write!(f, "codex_cli"),
            Provider::Offline => write!(f, "offline"),
        }
    }
}

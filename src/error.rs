use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Calendar needs exactly {expected} {kind} labels, got {actual}")]
    LabelCount {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate {kind} label '{label}'")]
    DuplicateLabel { kind: &'static str, label: String },

    #[error("topics_per_plan must be at least 1")]
    ZeroTopics,

    #[error("retry.max_attempts must be at least 1")]
    ZeroAttempts,

    #[error("retry.max_attempts is {actual}, at most {max} ranking attempts are allowed")]
    TooManyAttempts { max: u32, actual: u32 },

    #[error("ranking.timeout_sec must be at least 1")]
    ZeroTimeout,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Catalog must be a JSON array or an object with a 'topics' array")]
    UnexpectedShape,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Execution timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Process failed with exit code {code}: {stderr}")]
    NonZeroExit { code: i32, stderr: String },
}

/// Reasons the ranking path could not produce a selection.
#[derive(Error, Debug)]
pub enum SelectionError {
    #[error("No ranking provider configured")]
    Unavailable,

    #[error("Ranking provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("No JSON found in ranking response")]
    NoJson,

    #[error("Ranking response is not a JSON array of topics")]
    NotAnArray,

    #[error("Ranking response named no eligible topics")]
    EmptySelection,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Assembled plan is incomplete, missing: {}", missing.join(", "))]
    IncompletePlan { missing: Vec<String> },
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write output: {0}")]
    Write(std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

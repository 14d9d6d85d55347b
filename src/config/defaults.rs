use std::path::PathBuf;

pub fn default_version() -> u32 {
    1
}

pub fn default_catalog() -> PathBuf {
    PathBuf::from("data/topics.json")
}

pub fn default_topics_per_plan() -> usize {
    4
}

pub fn default_provider() -> super::Provider {
    super::Provider::ClaudeCli
}

pub fn default_timeout_sec() -> u64 {
    30
}

pub fn default_working_dir() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_claude_binary() -> PathBuf {
    // Check common install location first
    if let Some(home) = std::env::var_os("HOME") {
        let local_path = PathBuf::from(home).join(".claude/local/claude");
        if local_path.exists() {
            return local_path;
        }
    }
    // Fall back to PATH lookup
    PathBuf::from("claude")
}

pub fn default_claude_model() -> String {
    "sonnet".to_string()
}

pub fn default_codex_binary() -> PathBuf {
    PathBuf::from("codex")
}

pub fn default_codex_model() -> String {
    "gpt-4.1".to_string()
}

/// One retry after the first attempt
pub fn default_max_attempts() -> u32 {
    2
}

pub fn default_backoff_base_ms() -> u64 {
    500
}

pub fn default_week_labels() -> Vec<String> {
    (1..=4).map(|i| format!("week{}", i)).collect()
}

pub fn default_day_labels() -> Vec<String> {
    [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}

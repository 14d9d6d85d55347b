mod claude;
mod codex;
mod retry;

pub use claude::ClaudeRunner;
pub use codex::CodexRunner;
pub use retry::retry_with_backoff;

use crate::config::{Config, Provider};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct ProviderOutput {
    pub stdout: String,
    pub stderr: String,
    pub duration: Duration,
    pub exit_code: i32,
}

/// A ranking capability: takes a prompt, returns the model's raw answer
#[async_trait]
pub trait Runner: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, prompt: &str, timeout: Duration)
        -> Result<ProviderOutput, ProviderError>;
}

/// Create the configured ranking runner, or `None` when running offline
pub fn create_runner(config: &Config) -> Option<Arc<dyn Runner>> {
    match config.ranking.provider {
        Provider::ClaudeCli => Some(Arc::new(ClaudeRunner {
            binary: config.providers.claude_cli.binary.clone(),
            model: config.providers.claude_cli.model.clone(),
            working_dir: config.ranking.working_dir.clone(),
        })),
        Provider::CodexCli => Some(Arc::new(CodexRunner {
            binary: config.providers.codex_cli.binary.clone(),
            model: config.providers.codex_cli.model.clone(),
            working_dir: config.ranking.working_dir.clone(),
        })),
        Provider::Offline => None,
    }
}

/// Wrap a finished process. `stdout` is whatever the provider treats as its answer.
fn finish(
    output: std::process::Output,
    stdout: String,
    start: Instant,
) -> Result<ProviderOutput, ProviderError> {
    let exit_code = output.status.code().unwrap_or(-1);
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(ProviderError::NonZeroExit {
            code: exit_code,
            stderr,
        });
    }

    Ok(ProviderOutput {
        stdout,
        stderr,
        duration: start.elapsed(),
        exit_code,
    })
}

/// Use the path as-is when it looks like a path, otherwise let PATH lookup find it
fn command_for(binary: &std::path::Path) -> tokio::process::Command {
    let binary_str = binary.to_string_lossy();
    if binary_str.contains('/') || binary_str.contains('\\') {
        tokio::process::Command::new(binary)
    } else {
        tokio::process::Command::new(binary_str.as_ref())
    }
}

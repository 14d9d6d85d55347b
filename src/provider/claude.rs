use super::{command_for, finish, ProviderOutput, Runner};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::time::timeout as tokio_timeout;

pub struct ClaudeRunner {
    pub binary: PathBuf,
    pub model: String,
    pub working_dir: PathBuf,
}

#[async_trait]
impl Runner for ClaudeRunner {
    fn name(&self) -> &'static str {
        "claude_cli"
    }

    async fn execute(
        &self,
        prompt: &str,
        timeout: Duration,
    ) -> Result<ProviderOutput, ProviderError> {
        let mut cmd = command_for(&self.binary);

        cmd.current_dir(&self.working_dir);

        // Ensure subscription auth is used (not API key)
        cmd.env_remove("ANTHROPIC_API_KEY");

        // Ranking needs no tools; the answer is plain JSON text
        cmd.arg("-p")
            .arg(prompt)
            .arg("--model")
            .arg(&self.model)
            .arg("--output-format")
            .arg("json")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let start = Instant::now();
        let output = tokio_timeout(timeout, cmd.output())
            .await
            .map_err(|_| ProviderError::Timeout(timeout))??;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        finish(output, stdout, start)
    }
}

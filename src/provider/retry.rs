use crate::config::RetryConfig;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Run `operation` up to `config.max_attempts` times with jittered exponential backoff
pub async fn retry_with_backoff<F, Fut, T, E>(
    config: &RetryConfig,
    label: &str,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 0;
    let mut backoff_ms = config.backoff_base_ms;

    loop {
        attempt += 1;

        match operation(attempt).await {
            Ok(result) => return Ok(result),
            Err(e) if attempt >= max_attempts => {
                warn!("{}: all {} attempts failed: {}", label, attempt, e);
                return Err(e);
            }
            Err(e) => {
                let delay = backoff_delay(backoff_ms, config.backoff_base_ms);

                warn!(
                    "{}: attempt {} failed: {}. Retrying in {:?}...",
                    label, attempt, e, delay
                );

                sleep(delay).await;
                backoff_ms = backoff_ms.saturating_mul(2);
            }
        }
    }
}

/// `backoff_ms` plus up to one base of jitter, saturating instead of overflowing
fn backoff_delay(backoff_ms: u64, base_ms: u64) -> Duration {
    let jitter = if base_ms == 0 {
        0
    } else {
        rand::random::<u64>() % base_ms
    };
    Duration::from_millis(backoff_ms.saturating_add(jitter))
}

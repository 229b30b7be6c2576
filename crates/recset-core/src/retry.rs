//! Backoff-aware retry for mutating zone API calls
//!
//! The retry policy lives here, at the orchestration layer. `ZoneClient`
//! implementations must stay single-shot and report failures untouched;
//! a client that retried on its own would multiply the attempt budget and
//! hide throttling from the accessor.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::error::Result;

/// Default attempt budget for mutating calls
pub const DEFAULT_ATTEMPTS: u32 = 5;

/// Exponential backoff schedule: 1s, 2s, 4s, ... (2^attempt, saturating)
pub fn exponential_backoff(attempt: u32) -> Duration {
    Duration::from_secs(2u64.saturating_pow(attempt))
}

/// Run `operation` up to `attempts` times.
///
/// Only throttling failures are retried: after each one the task sleeps for
/// `backoff(attempt_index)` (index starting at 0) before the next try, and
/// the last throttling failure propagates once the budget is spent. Every
/// other failure propagates immediately on first occurrence, preserving the
/// original error value. `attempts` is treated as at least one call.
///
/// Stateless across calls; each invocation is independent.
pub async fn retry_with_backoff<T, F, Fut, B>(
    mut operation: F,
    attempts: u32,
    backoff: B,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    B: Fn(u32) -> Duration,
{
    let mut attempt = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_throttling() && attempt + 1 < attempts => {
                let delay = backoff(attempt);
                debug!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "throttled by provider, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

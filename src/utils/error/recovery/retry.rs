//! Retry mechanism with random exponential backoff

use super::types::RetryConfig;
use crate::core::types::errors::Retryable;
use rand::Rng;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Retry mechanism with random exponential backoff
///
/// Errors that report themselves as non-retryable are returned on the attempt that
/// produced them; the last error is returned unchanged once attempts are exhausted.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    config: RetryConfig,
}

impl RetryPolicy {
    /// Create a new retry policy
    pub fn new(config: RetryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetryConfig {
        &self.config
    }

    /// Execute a function with retry logic
    pub async fn call<F, Fut, R, E>(&self, mut f: F) -> Result<R, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<R, E>>,
        E: Retryable,
    {
        let max_attempts = self.config.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match f().await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!(attempt, "Retry succeeded");
                    }
                    return Ok(result);
                }
                Err(error) if !error.is_retryable() => {
                    debug!(
                        attempt,
                        error_type = error.error_type(),
                        "Non-retryable error, giving up"
                    );
                    return Err(error);
                }
                Err(error) => {
                    if attempt >= max_attempts {
                        error!(attempts = attempt, error = %error, "Retry failed");
                        return Err(error);
                    }

                    let delay = self.delay_for(attempt);
                    warn!(
                        attempt,
                        error = %error,
                        delay_secs = delay.as_secs_f64(),
                        "Attempt failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    /// Randomised wait after the given (1-based) failed attempt
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let low = self.config.min_wait;
        let high = self.config.backoff_ceiling(attempt);
        if high <= low {
            return low;
        }
        let secs = rand::thread_rng().gen_range(low.as_secs_f64()..=high.as_secs_f64());
        Duration::from_secs_f64(secs)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(RetryConfig::default())
    }
}

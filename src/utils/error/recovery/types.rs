//! Retry configuration

use once_cell::sync::Lazy;
use std::time::Duration;

/// Attempt ceiling used when `MODEL_MAX_RETRIES` is unset or invalid
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Process-wide attempt ceiling for model queries, read once from `MODEL_MAX_RETRIES`
pub static MAX_RETRIES: Lazy<u32> = Lazy::new(|| {
    std::env::var("MODEL_MAX_RETRIES")
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_MAX_RETRIES)
});

/// Retry configuration
///
/// Waits follow random exponential backoff: attempt `n` waits a uniformly random
/// duration between `min_wait` and `clamp(multiplier * 2^(n-1) s, min_wait, max_wait)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,
    /// Lower bound of every wait
    pub min_wait: Duration,
    /// Upper bound of every wait
    pub max_wait: Duration,
    /// Backoff multiplier in seconds
    pub multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: *MAX_RETRIES,
            min_wait: Duration::from_secs(60),
            max_wait: Duration::from_secs(180),
            multiplier: 1.0,
        }
    }
}

impl RetryConfig {
    /// Upper bound of the wait after the given (1-based) failed attempt
    pub fn backoff_ceiling(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(63) as i32;
        let secs = self.multiplier * 2f64.powi(exponent);
        let ceiling = if secs.is_finite() {
            Duration::from_secs_f64(secs.min(self.max_wait.as_secs_f64()).max(0.0))
        } else {
            self.max_wait
        };
        ceiling.clamp(self.min_wait, self.max_wait.max(self.min_wait))
    }
}

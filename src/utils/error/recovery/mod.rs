//! Error recovery and resilience utilities

mod retry;
mod types;

pub use retry::RetryPolicy;
pub use types::{DEFAULT_MAX_RETRIES, MAX_RETRIES, RetryConfig};

//! Common test utilities for litellm-model
//!
//! - Fixtures and data factories
//! - Mock provider server helpers
//! - Custom assertions

pub mod assertions;
pub mod fixtures;
pub mod mock_provider;

pub use fixtures::{ArgsFactory, HistoryFactory, fast_retry, test_registry};
pub use mock_provider::MockProvider;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

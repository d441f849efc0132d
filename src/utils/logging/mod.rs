//! Logging setup
//!
//! Library code only emits `tracing` events; binaries and tests that want to see
//! them install a subscriber with [`init_logging`].

mod subscriber;

pub use subscriber::{LogFormat, LoggingConfig, init_logging};

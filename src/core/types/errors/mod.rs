//! Error types for the model backend
//!
//! Every failure a query can produce is a variant of the closed [`ModelError`] enum.
//! The retry policy never inspects error types directly: it asks the
//! [`Retryable`] predicate, so classification lives in exactly one place.
//!
//! ## Classification
//! - Terminal for the current query: local or upstream context window overflow,
//!   budget ceilings, runtime failures, unsupported parameters, missing models or
//!   deployments, denied permissions and generic API errors.
//! - Transient: everything else the transport can report (network failures, rate
//!   limits, timeouts, server-side unavailability, rejected credentials and
//!   malformed-request responses).

mod config;
mod model;
mod traits;

pub use config::{ConfigError, ConfigResult};
pub use model::{CostScope, ModelError, Result};
pub use traits::Retryable;

//! Model adapter
//!
//! [`ProviderModel`] turns conversation history into completion requests, checks
//! the context window, retries transient failures and keeps cost statistics
//! against the configured budget ceilings.

mod provider;
mod provider_model;
mod stats;


pub use provider::{ProviderKind, ProviderStrategy};
pub use provider_model::ProviderModel;
pub use stats::Stats;

//! # litellm-model
//!
//! A model adapter for agent frameworks on top of a multi-provider completion layer.
//! It converts conversation history into chat messages, checks context windows,
//! retries transient provider failures and tracks cost against budget ceilings.
//!
//! ## Features
//!
//! - **Multi-Provider**: OpenAI-compatible APIs, Azure OpenAI, Vertex AI and Anthropic
//! - **Cost Tracking**: per-token pricing in litellm's `model_prices_and_context_window.json` format
//! - **Budget Limits**: total and per-task cost ceilings
//! - **Retries**: random exponential backoff that skips non-retryable errors
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use litellm_model::{HistoryItem, ModelArguments, ProviderModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let args = ModelArguments::new("litellm:gpt-4o-mini")
//!         .with_temperature(0.0)
//!         .with_per_instance_cost_limit(2.0);
//!     let model = ProviderModel::new(args)?;
//!
//!     let history = vec![
//!         HistoryItem::system("You are a helpful assistant."),
//!         HistoryItem::user("What is the capital of France?"),
//!     ];
//!     let reply = model.query(&history, false).await?;
//!     println!("{reply} (spent ${:.4})", model.stats().task_cost);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

pub use config::{ModelArguments, Validate};
pub use core::completion::{CompletionRequest, CompletionResponse, CompletionTransport, HttpTransport};
pub use core::model::{ProviderKind, ProviderModel, Stats};
pub use core::registry::{ModelInfo, ModelRegistry, PricingDatabase};
pub use core::types::errors::{ConfigError, CostScope, ModelError, Result, Retryable};
pub use core::types::{ChatMessage, HistoryItem, MessageRole, Messages};
pub use utils::error::recovery::{MAX_RETRIES, RetryConfig, RetryPolicy};
pub use utils::logging::{LogFormat, LoggingConfig, init_logging};

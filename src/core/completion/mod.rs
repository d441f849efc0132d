//! Completion transport
//!
//! A [`CompletionTransport`] issues one completion call against a provider. The
//! [`HttpTransport`] implementation speaks the OpenAI-compatible, Azure OpenAI,
//! Vertex AI and Anthropic HTTP APIs, selected from the provider prefix of the
//! model identifier.
//!
//! # Example
//! ```ignore
//! use litellm_model::core::completion::{CompletionRequest, CompletionTransport, HttpTransport};
//!
//! let transport = HttpTransport::new()?;
//! let response = transport
//!     .completion(&CompletionRequest::new("gpt-4o-mini", messages))
//!     .await?;
//! ```

mod anthropic;
mod http;
mod route;
mod transport;
mod types;

pub use http::{DEFAULT_TIMEOUT, HttpTransport};
pub use route::{ApiFlavor, Route, api_key_env_var, split_model};
pub use transport::CompletionTransport;
#[cfg(test)]
pub use transport::MockCompletionTransport;
pub use types::{Choice, CompletionRequest, CompletionResponse, ResponseMessage, Usage};

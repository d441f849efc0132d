//! Completion transport trait

use async_trait::async_trait;

use super::types::{CompletionRequest, CompletionResponse};
use crate::core::types::errors::Result;

/// Issues a single completion call against a provider
///
/// Implementations perform no retries; failures are mapped onto
/// [`ModelError`](crate::core::types::errors::ModelError) so callers can classify them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn completion(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}

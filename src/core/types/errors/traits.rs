//! Error traits consulted by the retry policy

/// Retryability predicate for errors flowing through a [`RetryPolicy`].
///
/// [`RetryPolicy`]: crate::utils::error::recovery::RetryPolicy
pub trait Retryable: std::error::Error + Send + Sync + 'static {
    /// Get the error type as a string identifier
    fn error_type(&self) -> &'static str;

    /// Check if this error can be retried
    fn is_retryable(&self) -> bool;
}

//! Model backend error taxonomy

use std::fmt;

use super::config::ConfigError;
use super::traits::Retryable;

/// Which budget ceiling a [`ModelError::CostLimitExceeded`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostScope {
    /// Lifetime spend of the model instance
    Total,
    /// Spend of the current task
    Instance,
}

impl fmt::Display for CostScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostScope::Total => write!(f, "Total"),
            CostScope::Instance => write!(f, "Instance"),
        }
    }
}

/// Top-level error type for model queries
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Input does not fit the resolved model's context window; raised before sending
    #[error("Input tokens {input_tokens} exceed max tokens {max_tokens}")]
    ContextWindowExceeded { input_tokens: u32, max_tokens: u32 },

    /// Provider rejected the request because the prompt was too long
    #[error("Context window exceeded ({provider}): {message}")]
    UpstreamContextWindowExceeded { provider: String, message: String },

    /// A positive budget ceiling was reached
    #[error("{scope} cost limit exceeded: cost {cost:.2}, limit {limit:.2}")]
    CostLimitExceeded {
        scope: CostScope,
        cost: f64,
        limit: f64,
    },

    /// Misuse of the model API by the caller
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// Provider does not accept one of the request parameters
    #[error("Unsupported parameter ({provider}): {message}")]
    UnsupportedParams { provider: String, message: String },

    /// Model or deployment does not exist
    #[error("Not found ({provider}): {message}")]
    NotFound { provider: String, message: String },

    /// Credentials are valid but lack access
    #[error("Permission denied ({provider}): {message}")]
    PermissionDenied { provider: String, message: String },

    /// Generic provider API failure
    #[error("API error ({provider}, status {status:?}): {message}")]
    Api {
        provider: String,
        status: Option<u16>,
        message: String,
    },

    /// Credentials were rejected
    #[error("Authentication error ({provider}): {message}")]
    Authentication { provider: String, message: String },

    /// Malformed request reported by the provider
    #[error("Bad request ({provider}): {message}")]
    BadRequest { provider: String, message: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded ({provider}): {message}")]
    RateLimit {
        provider: String,
        message: String,
        retry_after: Option<u64>,
    },

    /// Request timed out
    #[error("Request timed out ({provider}): {message}")]
    Timeout { provider: String, message: String },

    /// Provider-side failure (5xx)
    #[error("Service unavailable ({provider}): {message}")]
    ServiceUnavailable { provider: String, message: String },

    /// Network connectivity error
    #[error("Network error: {0}")]
    Network(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ModelError {
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime(message.into())
    }

    pub fn api(provider: impl Into<String>, status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Api {
            provider: provider.into(),
            status,
            message: message.into(),
        }
    }

    pub fn rate_limit(
        provider: impl Into<String>,
        message: impl Into<String>,
        retry_after: Option<u64>,
    ) -> Self {
        Self::RateLimit {
            provider: provider.into(),
            message: message.into(),
            retry_after,
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Map an HTTP error response from a provider onto the taxonomy
    pub fn from_status(
        provider: impl Into<String>,
        status: u16,
        body: &str,
        retry_after: Option<u64>,
    ) -> Self {
        let provider = provider.into();
        let message = body.to_string();
        let lower = body.to_lowercase();

        match status {
            400 if is_context_window_message(&lower) => {
                Self::UpstreamContextWindowExceeded { provider, message }
            }
            400 if lower.contains("unsupported") && lower.contains("param") => {
                Self::UnsupportedParams { provider, message }
            }
            400 | 422 => Self::BadRequest { provider, message },
            401 => Self::Authentication { provider, message },
            403 => Self::PermissionDenied { provider, message },
            404 => Self::NotFound { provider, message },
            408 => Self::Timeout { provider, message },
            429 => Self::RateLimit {
                provider,
                message,
                retry_after,
            },
            500..=599 => Self::ServiceUnavailable { provider, message },
            _ => Self::Api {
                provider,
                status: Some(status),
                message,
            },
        }
    }
}

fn is_context_window_message(lower: &str) -> bool {
    lower.contains("context_length_exceeded")
        || lower.contains("context length")
        || lower.contains("maximum context")
        || lower.contains("prompt is too long")
        || lower.contains("too many tokens")
}

impl Retryable for ModelError {
    fn error_type(&self) -> &'static str {
        match self {
            Self::ContextWindowExceeded { .. } => "context_window_exceeded",
            Self::UpstreamContextWindowExceeded { .. } => "upstream_context_window_exceeded",
            Self::CostLimitExceeded { .. } => "cost_limit_exceeded",
            Self::Runtime(_) => "runtime",
            Self::UnsupportedParams { .. } => "unsupported_params",
            Self::NotFound { .. } => "not_found",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::Api { .. } => "api_error",
            Self::Authentication { .. } => "authentication",
            Self::BadRequest { .. } => "bad_request",
            Self::RateLimit { .. } => "rate_limit",
            Self::Timeout { .. } => "timeout",
            Self::ServiceUnavailable { .. } => "service_unavailable",
            Self::Network(_) => "network",
            Self::Config(_) => "config",
            Self::Serialization(_) => "serialization",
        }
    }

    /// Everything outside the fixed non-retryable set is retried
    fn is_retryable(&self) -> bool {
        !matches!(
            self,
            Self::ContextWindowExceeded { .. }
                | Self::UpstreamContextWindowExceeded { .. }
                | Self::CostLimitExceeded { .. }
                | Self::Runtime(_)
                | Self::UnsupportedParams { .. }
                | Self::NotFound { .. }
                | Self::PermissionDenied { .. }
                | Self::Api { .. }
                | Self::Config(_)
        )
    }
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: "http".to_string(),
                message: err.to_string(),
            }
        } else if err.is_decode() {
            Self::api("http", err.status().map(|s| s.as_u16()), err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ModelError>;

//! Provider routing
//!
//! Maps a model identifier such as `azure/gpt-4o` onto a wire format, endpoint and
//! credentials.

use crate::config::DEFAULT_VERTEX_LOCATION;
use crate::core::types::errors::{ConfigError, ModelError, Result};

use super::types::CompletionRequest;

pub(super) const DEFAULT_AZURE_API_VERSION: &str = "2024-02-01";
pub(super) const DEFAULT_ANTHROPIC_VERSION: &str = "2023-06-01";
const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com";

/// Wire format and authentication scheme of a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFlavor {
    /// `/chat/completions` with a bearer token
    OpenAi,
    /// Deployment URL with an `api-key` header
    Azure,
    /// Vertex AI OpenAI-compatible endpoint with a bearer token
    Vertex,
    /// `/v1/messages` with an `x-api-key` header
    Anthropic,
}

/// Fully resolved target of one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub flavor: ApiFlavor,
    /// Provider prefix used for error reporting and key lookup
    pub provider: String,
    /// Model name as the upstream API expects it
    pub upstream_model: String,
    pub url: String,
    pub api_key: Option<String>,
}

/// Split `provider/model` into its parts; bare names are routed by prefix
pub fn split_model(model: &str) -> (&str, &str) {
    match model.split_once('/') {
        Some((provider, name)) => (provider, name),
        None if model.starts_with("claude") => ("anthropic", model),
        None => ("openai", model),
    }
}

fn default_api_base(provider: &str) -> Option<&'static str> {
    match provider {
        "openai" => Some("https://api.openai.com/v1"),
        "deepseek" => Some("https://api.deepseek.com/v1"),
        "groq" => Some("https://api.groq.com/openai/v1"),
        "mistral" => Some("https://api.mistral.ai/v1"),
        "openrouter" => Some("https://openrouter.ai/api/v1"),
        "xai" => Some("https://api.x.ai/v1"),
        "together_ai" => Some("https://api.together.xyz/v1"),
        "ollama" => Some("http://localhost:11434/v1"),
        _ => None,
    }
}

/// Environment variable holding the API key of a provider, e.g. `DEEPSEEK_API_KEY`
pub fn api_key_env_var(provider: &str) -> String {
    format!("{}_API_KEY", provider.to_uppercase())
}

impl Route {
    /// Resolve the route of a request; `env` supplies fallbacks for missing credentials
    pub fn resolve<F>(request: &CompletionRequest, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let (provider, name) = split_model(&request.model);
        let api_base = request
            .api_base
            .as_deref()
            .map(|base| base.trim_end_matches('/').to_string());

        match provider {
            "azure" => {
                let base = api_base
                    .or_else(|| env("AZURE_API_BASE"))
                    .ok_or_else(|| ModelError::Config(ConfigError::missing_field("host_url")))?;
                let api_version = request
                    .api_version
                    .clone()
                    .or_else(|| env("AZURE_API_VERSION"))
                    .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string());
                Ok(Self {
                    flavor: ApiFlavor::Azure,
                    provider: provider.to_string(),
                    upstream_model: name.to_string(),
                    url: format!(
                        "{}/openai/deployments/{}/chat/completions?api-version={}",
                        base.trim_end_matches('/'),
                        name,
                        api_version
                    ),
                    api_key: request.api_key.clone().or_else(|| env("AZURE_API_KEY")),
                })
            }
            "vertex_ai" => {
                let url = match api_base {
                    Some(base) => format!("{}/chat/completions", base),
                    None => {
                        let project = request
                            .vertex_project
                            .clone()
                            .or_else(|| env("VERTEXAI_PROJECT"))
                            .ok_or_else(|| {
                                ModelError::Config(ConfigError::missing_field("vertex_project"))
                            })?;
                        let location = request
                            .vertex_location
                            .as_deref()
                            .unwrap_or(DEFAULT_VERTEX_LOCATION);
                        format!(
                            "https://{location}-aiplatform.googleapis.com/v1/projects/{project}/locations/{location}/endpoints/openapi/chat/completions"
                        )
                    }
                };
                let upstream_model = if name.contains('/') {
                    name.to_string()
                } else {
                    format!("google/{}", name)
                };
                Ok(Self {
                    flavor: ApiFlavor::Vertex,
                    provider: provider.to_string(),
                    upstream_model,
                    url,
                    api_key: request
                        .api_key
                        .clone()
                        .or_else(|| env("VERTEXAI_ACCESS_TOKEN")),
                })
            }
            "anthropic" => Ok(Self {
                flavor: ApiFlavor::Anthropic,
                provider: provider.to_string(),
                upstream_model: name.to_string(),
                url: format!(
                    "{}/v1/messages",
                    api_base.as_deref().unwrap_or(ANTHROPIC_API_BASE)
                ),
                api_key: request.api_key.clone().or_else(|| env("ANTHROPIC_API_KEY")),
            }),
            _ => {
                let base = api_base
                    .or_else(|| default_api_base(provider).map(str::to_string))
                    .ok_or_else(|| ModelError::Config(ConfigError::missing_field("host_url")))?;
                Ok(Self {
                    flavor: ApiFlavor::OpenAi,
                    provider: provider.to_string(),
                    upstream_model: name.to_string(),
                    url: format!("{}/chat/completions", base),
                    api_key: request
                        .api_key
                        .clone()
                        .or_else(|| env(&api_key_env_var(provider))),
                })
            }
        }
    }
}

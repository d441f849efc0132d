//! Provider-specific configuration
//!
//! The provider is resolved once from the model identifier. Each variant has a
//! strategy that performs construction-time setup and adds its fields to every
//! completion request.

use tracing::{info, warn};

use crate::config::ModelArguments;
use crate::core::completion::CompletionRequest;
use crate::core::registry::ModelInfo;

/// Provider family relevant to configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Provider known to the registry, no extra configuration
    Generic,
    /// Azure OpenAI (`azure/...`)
    Azure,
    /// Vertex AI (`vertex_ai/...`)
    Vertex,
    /// Unregistered model served from a custom `host_url`
    CustomEndpoint,
}

impl ProviderKind {
    pub fn resolve(model_id: &str, info: Option<&ModelInfo>, args: &ModelArguments) -> Self {
        if model_id.starts_with("azure/") {
            Self::Azure
        } else if model_id.starts_with("vertex_ai/") {
            Self::Vertex
        } else if info.and_then(ModelInfo::provider).is_none() && args.host_url.is_some() {
            Self::CustomEndpoint
        } else {
            Self::Generic
        }
    }

    /// Run construction-time setup and return the strategy for this provider
    pub fn configure(self, args: &ModelArguments) -> Box<dyn ProviderStrategy> {
        match self {
            Self::Generic => Box::new(GenericProvider),
            Self::Azure => Box::new(AzureProvider::configure(args)),
            Self::Vertex => Box::new(VertexProvider::configure(args)),
            Self::CustomEndpoint => Box::new(CustomEndpointProvider::configure(args)),
        }
    }
}

/// Per-provider request shaping
pub trait ProviderStrategy: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> ProviderKind;

    /// Add provider-specific fields to a request
    fn apply(&self, args: &ModelArguments, request: &mut CompletionRequest);
}

#[derive(Debug)]
struct GenericProvider;

impl ProviderStrategy for GenericProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Generic
    }

    fn apply(&self, args: &ModelArguments, request: &mut CompletionRequest) {
        request.api_key = args.api_key.clone();
    }
}

#[derive(Debug)]
struct CustomEndpointProvider;

impl CustomEndpointProvider {
    fn configure(args: &ModelArguments) -> Self {
        warn!(
            host_url = args.host_url.as_deref().unwrap_or_default(),
            "Using a custom API base. Cost management and context length error checking will not work."
        );
        Self
    }
}

impl ProviderStrategy for CustomEndpointProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::CustomEndpoint
    }

    fn apply(&self, args: &ModelArguments, request: &mut CompletionRequest) {
        request.api_key = args.api_key.clone();
    }
}

/// Client-level Azure settings captured at construction
#[derive(Debug, Clone, PartialEq, Eq)]
struct AzureSettings {
    api_key: String,
    api_base: String,
    api_version: Option<String>,
}

#[derive(Debug)]
struct AzureProvider {
    settings: Option<AzureSettings>,
}

impl AzureProvider {
    fn configure(args: &ModelArguments) -> Self {
        let settings = match (&args.api_key, &args.host_url) {
            (Some(api_key), Some(host_url)) => {
                info!(host_url = %host_url, "Configuring Azure OpenAI");
                Some(AzureSettings {
                    api_key: api_key.clone(),
                    api_base: host_url.clone(),
                    api_version: args.api_version.clone(),
                })
            }
            _ => {
                warn!("Azure model specified but missing api_key or host_url");
                None
            }
        };
        Self { settings }
    }
}

impl ProviderStrategy for AzureProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Azure
    }

    fn apply(&self, args: &ModelArguments, request: &mut CompletionRequest) {
        request.api_key = args.api_key.clone();
        request.api_version = args.api_version.clone();

        if let Some(settings) = &self.settings {
            request.api_key.get_or_insert_with(|| settings.api_key.clone());
            request.api_base.get_or_insert_with(|| settings.api_base.clone());
            if request.api_version.is_none() {
                request.api_version = settings.api_version.clone();
            }
        }
    }
}

#[derive(Debug)]
struct VertexProvider;

impl VertexProvider {
    fn configure(args: &ModelArguments) -> Self {
        info!("Configuring Vertex AI");
        match &args.vertex_project {
            Some(project) => {
                let location = args.vertex_location_or_default();
                // SAFETY: runs once per model construction, before any request is issued.
                // Other tooling in the process reads these variables.
                unsafe {
                    std::env::set_var("GOOGLE_CLOUD_PROJECT", project);
                    std::env::set_var("VERTEXAI_PROJECT", project);
                    std::env::set_var("VERTEXAI_LOCATION", location);
                }
                if let Some(path) = &args.vertex_credentials_path {
                    info!(path = %path.display(), "Using Vertex AI credentials");
                }
            }
            None => warn!("Vertex AI model specified but missing vertex_project"),
        }
        Self
    }
}

impl ProviderStrategy for VertexProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Vertex
    }

    fn apply(&self, args: &ModelArguments, request: &mut CompletionRequest) {
        request.api_key = args.api_key.clone();
        request.vertex_project = args.vertex_project.clone();
        request.vertex_location = Some(args.vertex_location_or_default().to_string());
    }
}

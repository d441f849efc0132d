//! HTTP completion transport

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};
use reqwest::{Client, ClientBuilder, Response};
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::anthropic;
use super::route::{ApiFlavor, DEFAULT_ANTHROPIC_VERSION, Route};
use super::transport::CompletionTransport;
use super::types::{CompletionRequest, CompletionResponse};
use crate::core::types::errors::{ConfigError, ModelError, Result};

/// Request timeout used by [`HttpTransport::new`]
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Completion transport speaking the providers' HTTP APIs
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelError::network(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    fn build_body(&self, request: &CompletionRequest, route: &Route) -> Value {
        if route.flavor == ApiFlavor::Anthropic {
            return anthropic::build_body(request, &route.upstream_model);
        }

        let mut body = json!({
            "model": route.upstream_model,
            "messages": request.messages,
            "temperature": request.temperature,
            "top_p": request.top_p,
        });
        for (key, value) in &request.extra {
            body[key.as_str()] = value.clone();
        }
        if let Some(max_tokens) = request.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }
        body
    }

    fn build_headers(&self, route: &Route) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        if let Some(api_key) = &route.api_key {
            match route.flavor {
                ApiFlavor::Azure => {
                    headers.insert(HeaderName::from_static("api-key"), header_value(api_key)?);
                }
                ApiFlavor::Anthropic => {
                    headers.insert(HeaderName::from_static("x-api-key"), header_value(api_key)?);
                }
                ApiFlavor::OpenAi | ApiFlavor::Vertex => {
                    headers.insert(AUTHORIZATION, header_value(&format!("Bearer {}", api_key))?);
                }
            }
        }

        // `api_version` belongs to Azure; Anthropic pins its own header
        if route.flavor == ApiFlavor::Anthropic {
            headers.insert(
                HeaderName::from_static("anthropic-version"),
                HeaderValue::from_static(DEFAULT_ANTHROPIC_VERSION),
            );
        }

        Ok(headers)
    }

    async fn handle_response(&self, route: &Route, response: Response) -> Result<CompletionResponse> {
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            warn!(
                provider = %route.provider,
                status = status,
                "Completion request failed"
            );
            return Err(ModelError::from_status(
                route.provider.as_str(),
                status,
                &body,
                retry_after,
            ));
        }

        let parsed = match route.flavor {
            ApiFlavor::Anthropic => anthropic::parse_response(&body)?,
            _ => serde_json::from_str(&body)?,
        };
        Ok(parsed)
    }
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|_| ModelError::Config(ConfigError::invalid_value("api_key", "<not a valid header value>")))
}

#[async_trait]
impl CompletionTransport for HttpTransport {
    async fn completion(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let route = Route::resolve(request, |key| std::env::var(key).ok())?;
        let body = self.build_body(request, &route);
        let headers = self.build_headers(&route)?;

        debug!(
            provider = %route.provider,
            model = %route.upstream_model,
            url = %route.url,
            "Sending completion request"
        );

        let response = self
            .client
            .post(&route.url)
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        self.handle_response(&route, response).await
    }
}

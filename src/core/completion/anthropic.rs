//! Anthropic messages API translation

use serde::Deserialize;
use serde_json::{Value, json};

use super::types::{Choice, CompletionRequest, CompletionResponse, ResponseMessage, Usage};
use crate::core::types::MessageRole;

/// Anthropic requires `max_tokens` on every request
const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Build a messages API body; system turns are lifted into the `system` field
pub(super) fn build_body(request: &CompletionRequest, upstream_model: &str) -> Value {
    let system = request
        .messages
        .iter()
        .filter(|m| m.role == MessageRole::System)
        .map(|m| m.content.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let messages: Vec<Value> = request
        .messages
        .iter()
        .filter(|m| m.role != MessageRole::System)
        .map(|m| json!({"role": m.role.as_str(), "content": m.content}))
        .collect();

    let mut body = json!({
        "model": upstream_model,
        "messages": messages,
        "temperature": request.temperature,
        "top_p": request.top_p,
        "max_tokens": DEFAULT_MAX_TOKENS,
    });
    if !system.is_empty() {
        body["system"] = Value::String(system);
    }
    for (key, value) in &request.extra {
        body[key.as_str()] = value.clone();
    }
    if let Some(max_tokens) = request.max_tokens {
        body["max_tokens"] = json!(max_tokens);
    }
    body
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Option<MessagesUsage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MessagesUsage {
    #[serde(default)]
    input_tokens: u32,
    #[serde(default)]
    output_tokens: u32,
}

/// Convert a messages API response into the OpenAI shape
pub(super) fn parse_response(body: &str) -> serde_json::Result<CompletionResponse> {
    let response: MessagesResponse = serde_json::from_str(body)?;

    let text: String = response
        .content
        .iter()
        .filter(|block| block.kind == "text")
        .filter_map(|block| block.text.as_deref())
        .collect();

    Ok(CompletionResponse {
        id: response.id,
        model: response.model,
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: Some("assistant".to_string()),
                content: (!text.is_empty()).then_some(text),
            },
            finish_reason: response.stop_reason,
        }],
        usage: response.usage.map(|u| Usage {
            prompt_tokens: u.input_tokens,
            completion_tokens: u.output_tokens,
            total_tokens: u.input_tokens.saturating_add(u.output_tokens),
        }),
    })
}

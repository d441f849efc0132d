//! Bundled model table
//!
//! Prices are USD per token, context limits as published by each provider.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::pricing::ModelInfo;

pub(super) static BUILTIN_MODELS: Lazy<HashMap<String, ModelInfo>> = Lazy::new(|| {
    let entries = [
        // OpenAI
        ("gpt-4", ModelInfo::chat("openai", 8192, 4096, 0.00003, 0.00006)),
        ("gpt-4-turbo", ModelInfo::chat("openai", 128000, 4096, 0.00001, 0.00003)),
        ("gpt-4o", ModelInfo::chat("openai", 128000, 16384, 0.0000025, 0.00001)),
        ("gpt-4o-mini", ModelInfo::chat("openai", 128000, 16384, 0.00000015, 0.0000006)),
        ("gpt-3.5-turbo", ModelInfo::chat("openai", 16385, 4096, 0.0000005, 0.0000015)),
        ("o1-mini", ModelInfo::chat("openai", 128000, 65536, 0.000003, 0.000012)),
        // Anthropic
        (
            "claude-3-5-sonnet-20241022",
            ModelInfo::chat("anthropic", 200000, 8192, 0.000003, 0.000015),
        ),
        (
            "claude-3-5-haiku-20241022",
            ModelInfo::chat("anthropic", 200000, 8192, 0.0000008, 0.000004),
        ),
        (
            "claude-3-opus-20240229",
            ModelInfo::chat("anthropic", 200000, 4096, 0.000015, 0.000075),
        ),
        (
            "claude-3-haiku-20240307",
            ModelInfo::chat("anthropic", 200000, 4096, 0.00000025, 0.00000125),
        ),
        // Azure OpenAI
        ("azure/gpt-4", ModelInfo::chat("azure", 8192, 4096, 0.00003, 0.00006)),
        ("azure/gpt-4o", ModelInfo::chat("azure", 128000, 16384, 0.000005, 0.000015)),
        ("azure/gpt-4o-mini", ModelInfo::chat("azure", 128000, 16384, 0.000000165, 0.00000066)),
        ("azure/gpt-35-turbo", ModelInfo::chat("azure", 4097, 4096, 0.0000005, 0.0000015)),
        // Vertex AI
        (
            "vertex_ai/gemini-1.5-pro",
            ModelInfo::chat("vertex_ai-language-models", 2097152, 8192, 0.00000125, 0.000005),
        ),
        (
            "vertex_ai/gemini-1.5-flash",
            ModelInfo::chat("vertex_ai-language-models", 1000000, 8192, 0.000000075, 0.0000003),
        ),
        (
            "vertex_ai/claude-3-5-sonnet@20240620",
            ModelInfo::chat("vertex_ai-anthropic_models", 200000, 8192, 0.000003, 0.000015),
        ),
        // DeepSeek
        (
            "deepseek/deepseek-chat",
            ModelInfo::chat("deepseek", 65536, 8192, 0.00000014, 0.00000028),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, info)| (name.to_string(), info))
        .collect()
});

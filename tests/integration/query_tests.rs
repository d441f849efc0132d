//! Query path integration tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{Value, json};
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, ResponseTemplate};

    use crate::assert_approx_eq;
    use crate::common::fixtures::{INPUT_COST, OUTPUT_COST};
    use crate::common::{ArgsFactory, HistoryFactory, MockProvider, fast_retry, test_registry};
    use litellm_model::{HttpTransport, ModelArguments, ModelError, ProviderKind, ProviderModel};

    fn build_model(args: ModelArguments) -> ProviderModel {
        ProviderModel::with_components(
            args,
            test_registry(),
            Arc::new(HttpTransport::new().unwrap()),
            fast_retry(3),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_query_openai_compatible_endpoint() {
        let provider = MockProvider::start().await;
        provider.reply("pong", 12, 3).await;

        let model = build_model(ArgsFactory::priced(&provider.uri()));
        let reply = model.query(&HistoryFactory::short(), false).await.unwrap();
        assert_eq!(reply, "pong");

        let stats = model.stats();
        assert_eq!(stats.api_calls, 1);
        assert_approx_eq!(stats.total_cost, 12.0 * INPUT_COST + 3.0 * OUTPUT_COST);

        let requests = provider.server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["model"], "priced-model");
        assert_eq!(body["temperature"], 0.0);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "Ping?");
        assert!(body.get("max_tokens").is_none());
        assert_eq!(
            requests[0].headers.get("authorization").unwrap(),
            "Bearer test-key"
        );
    }

    #[tokio::test]
    async fn test_query_passes_completion_kwargs() {
        let provider = MockProvider::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({"stop": ["</s>"], "seed": 7})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(MockProvider::chat_body("ok", 1, 1)),
            )
            .expect(1)
            .mount(&provider.server)
            .await;

        let args = ArgsFactory::priced(&provider.uri())
            .with_completion_kwarg("stop", json!(["</s>"]))
            .with_completion_kwarg("seed", json!(7));
        build_model(args)
            .query(&HistoryFactory::short(), false)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_query_azure_deployment() {
        let provider = MockProvider::start().await;
        Mock::given(method("POST"))
            .and(path("/openai/deployments/gpt-4o/chat/completions"))
            .and(query_param("api-version", "2024-06-01"))
            .and(header("api-key", "azure-key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(MockProvider::chat_body("azure ok", 20, 2)),
            )
            .expect(1)
            .mount(&provider.server)
            .await;

        let model = build_model(ArgsFactory::azure(&provider.uri()));
        assert_eq!(model.provider_kind(), ProviderKind::Azure);
        let reply = model.query(&HistoryFactory::short(), false).await.unwrap();
        assert_eq!(reply, "azure ok");
        assert!(model.stats().total_cost > 0.0);
    }

    #[tokio::test]
    async fn test_query_anthropic_forces_max_output_tokens() {
        let provider = MockProvider::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "anthropic-key"))
            .and(body_partial_json(json!({
                "model": "claude-3-5-haiku-20241022",
                "system": "You are terse.",
                "max_tokens": 8192
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_test",
                "type": "message",
                "role": "assistant",
                "content": [{"type": "text", "text": "Pong."}],
                "stop_reason": "end_turn",
                "usage": {"input_tokens": 15, "output_tokens": 3}
            })))
            .expect(1)
            .mount(&provider.server)
            .await;

        let model = build_model(ArgsFactory::anthropic(&provider.uri()));
        let reply = model.query(&HistoryFactory::short(), false).await.unwrap();
        assert_eq!(reply, "Pong.");
    }

    #[tokio::test]
    async fn test_context_window_checked_before_sending() {
        let provider = MockProvider::start().await;
        provider.reply("never", 1, 1).await;

        let model = build_model(ArgsFactory::priced(&provider.uri()));
        let err = model
            .query(&HistoryFactory::oversized(), false)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ModelError::ContextWindowExceeded {
                max_tokens: 100,
                ..
            }
        ));
        assert_eq!(provider.request_count().await, 0);
        assert_eq!(model.stats().api_calls, 0);
    }

    #[tokio::test]
    async fn test_custom_endpoint_without_pricing() {
        let provider = MockProvider::start().await;
        provider.reply("local", 500, 500).await;

        let args = ModelArguments::new("litellm:local/llama-3-8b").with_host_url(provider.uri());
        let model = build_model(args);
        assert_eq!(model.provider_kind(), ProviderKind::CustomEndpoint);

        // No context limit is known, so even a long prompt goes through
        let reply = model
            .query(&HistoryFactory::oversized(), false)
            .await
            .unwrap();
        assert_eq!(reply, "local");
        assert_eq!(model.stats().total_cost, 0.0);
    }
}

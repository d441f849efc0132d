//! Retry and error classification integration tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Instant;

    use wiremock::matchers::method;
    use wiremock::{Mock, ResponseTemplate};

    use crate::assert_duration_within;
    use crate::common::{ArgsFactory, HistoryFactory, MockProvider, fast_retry, test_registry};
    use litellm_model::{HttpTransport, ModelError, ProviderModel, Retryable};

    async fn model_for(provider: &MockProvider, max_attempts: u32) -> ProviderModel {
        ProviderModel::with_components(
            ArgsFactory::priced(&provider.uri()),
            test_registry(),
            Arc::new(HttpTransport::new().unwrap()),
            fast_retry(max_attempts),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_server_errors_exhaust_attempts() {
        let provider = MockProvider::start().await;
        provider.fail(503, "overloaded").await;

        let model = model_for(&provider, 3).await;
        let err = model
            .query(&HistoryFactory::short(), false)
            .await
            .unwrap_err();

        assert!(matches!(err, ModelError::ServiceUnavailable { .. }));
        assert_eq!(provider.request_count().await, 3);
        assert_eq!(model.stats().api_calls, 0);
    }

    #[tokio::test]
    async fn test_recovers_after_transient_failures() {
        let provider = MockProvider::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
            .up_to_n_times(2)
            .mount(&provider.server)
            .await;
        provider.reply("finally", 5, 1).await;

        let model = model_for(&provider, 3).await;
        let reply = model.query(&HistoryFactory::short(), false).await.unwrap();

        assert_eq!(reply, "finally");
        assert_eq!(provider.request_count().await, 3);
        assert_eq!(model.stats().api_calls, 1);
    }

    #[tokio::test]
    async fn test_non_retryable_statuses_fail_fast() {
        let cases = [
            (404, "The model does not exist", "not_found"),
            (403, "Project lacks access", "permission_denied"),
            (400, "Unsupported parameter: 'top_p'", "unsupported_params"),
            (
                400,
                "This model's maximum context length is 100 tokens",
                "upstream_context_window_exceeded",
            ),
            (409, "conflict", "api_error"),
        ];

        for (status, body, expected) in cases {
            let provider = MockProvider::start().await;
            provider.fail(status, body).await;

            let model = model_for(&provider, 5).await;
            let start = Instant::now();
            let err = model
                .query(&HistoryFactory::short(), false)
                .await
                .unwrap_err();

            assert_eq!(err.error_type(), expected, "status {status}");
            assert!(!err.is_retryable());
            assert_eq!(provider.request_count().await, 1, "status {status}");
            assert_duration_within!(start.elapsed(), 5_000);
        }
    }

    #[tokio::test]
    async fn test_single_attempt_configuration() {
        let provider = MockProvider::start().await;
        provider.fail(500, "boom").await;

        let model = model_for(&provider, 1).await;
        let err = model
            .query(&HistoryFactory::short(), false)
            .await
            .unwrap_err();

        assert!(err.is_retryable());
        assert_eq!(provider.request_count().await, 1);
    }
}

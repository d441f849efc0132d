//! Cost accounting and budget limit integration tests

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::assert_approx_eq;
    use crate::common::assertions::assert_cost_limit;
    use crate::common::{ArgsFactory, HistoryFactory, MockProvider, fast_retry, test_registry};
    use litellm_model::{CostScope, HttpTransport, ModelArguments, ProviderModel};

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
    async fn test_instance_limit_stops_third_call() {
        let provider = MockProvider::start().await;
        // 1000 * 0.001 + 500 * 0.002 = 2.00 per call
        provider.reply("step", 1000, 500).await;

        let model = build_model(ArgsFactory::priced(&provider.uri()).with_per_instance_cost_limit(5.0));
        let history = HistoryFactory::short();

        model.query(&history, false).await.unwrap();
        model.query(&history, false).await.unwrap();
        let err = model.query(&history, false).await.unwrap_err();

        let cost = assert_cost_limit(&err, CostScope::Instance);
        assert_approx_eq!(cost, 6.0);

        let stats = model.stats();
        assert_approx_eq!(stats.task_cost, 6.0);
        assert_approx_eq!(stats.total_cost, 6.0);
        assert_eq!(stats.api_calls, 3);
        // The over-budget call is not retried
        assert_eq!(provider.request_count().await, 3);
    }

    #[tokio::test]
    async fn test_total_limit() {
        let provider = MockProvider::start().await;
        provider.reply("step", 1000, 500).await;

        let model = build_model(
            ArgsFactory::priced(&provider.uri())
                .with_total_cost_limit(3.0)
                .with_per_instance_cost_limit(3.0),
        );
        let history = HistoryFactory::short();

        model.query(&history, false).await.unwrap();
        let err = model.query(&history, false).await.unwrap_err();
        assert_cost_limit(&err, CostScope::Total);
    }

    #[tokio::test]
    async fn test_unlimited_budget() {
        let provider = MockProvider::start().await;
        provider.reply("step", 1000, 500).await;

        let model = build_model(
            ArgsFactory::priced(&provider.uri())
                .with_total_cost_limit(0.0)
                .with_per_instance_cost_limit(-1.0),
        );
        let history = HistoryFactory::short();
        for _ in 0..5 {
            model.query(&history, false).await.unwrap();
        }

        let stats = model.stats();
        assert_eq!(stats.api_calls, 5);
        assert_approx_eq!(stats.total_cost, 10.0);
    }
}

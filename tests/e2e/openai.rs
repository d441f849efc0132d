//! E2E tests against the OpenAI API
//!
//! Run with: OPENAI_API_KEY=xxx cargo test -- --ignored openai

#[cfg(test)]
mod tests {
    use litellm_model::{HistoryItem, ModelArguments, ProviderModel};

    use crate::skip_without_env;

    #[tokio::test]
    #[ignore]
    async fn test_openai_query_tracks_cost() {
        skip_without_env!("OPENAI_API_KEY");

        let args = ModelArguments::new("litellm:gpt-4o-mini")
            .with_temperature(0.0)
            .with_per_instance_cost_limit(0.05);
        let model = ProviderModel::new(args).expect("Failed to create model");

        let history = vec![
            HistoryItem::system("Answer with a single word."),
            HistoryItem::user("What colour is the sky on a clear day?"),
        ];
        let reply = model.query(&history, false).await;
        assert!(reply.is_ok(), "OpenAI query failed: {:?}", reply.err());

        let reply = reply.unwrap();
        println!("OpenAI response: {}", reply);
        assert!(!reply.is_empty());

        let stats = model.stats();
        assert_eq!(stats.api_calls, 1);
        assert!(stats.total_cost > 0.0);
    }
}

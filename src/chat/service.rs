use std::sync::Arc;
use std::time::Instant;
use chrono::Utc;
use crate::cost::calculate_cost;
use crate::errors::ChatbenchError;
use crate::faq::FaqStore;
use crate::history::HistoryLog;
use crate::llm::ProviderRouter;
use crate::prompt::PromptStore;
use crate::utils::formatting::format_seconds;
use super::models::{ChatRequest, TestResult};
use tracing::{info, warn};

/// Owned service context shared by every handler.
pub struct ChatService {
    pub faq: Arc<FaqStore>,
    pub history: Arc<HistoryLog>,
    pub router: ProviderRouter,
    pub prompt: PromptStore,
}

impl ChatService {
    pub fn new(faq: FaqStore, router: ProviderRouter, prompt: PromptStore) -> Self {
        Self {
            faq: Arc::new(faq),
            history: Arc::new(HistoryLog::new()),
            router,
            prompt,
        }
    }

    /// The system prompt as it would be sent right now.
    pub async fn current_prompt(&self) -> String {
        let snapshot = self.faq.get().await;
        self.prompt.render(&snapshot.data).await
    }

    /// FAQ read -> prompt -> one provider call -> cost -> history append.
    /// Nothing is recorded on failure.
    pub async fn chat(&self, request: &ChatRequest) -> Result<TestResult, ChatbenchError> {
        let start = Instant::now();

        let provider = self.router.create_provider(&request.model, request.api_key.as_deref())?;
        let system = self.current_prompt().await;

        let completion = provider
            .complete(&system, &request.message, &request.params())
            .await
            .map_err(|e| {
                warn!(model = %request.model, provider = %provider.kind(), error = %e, "Chat completion failed");
                e
            })?;

        let response_time = start.elapsed().as_secs_f64();
        let cost = calculate_cost(&request.model, completion.tokens);

        let result = TestResult {
            model: request.model.clone(),
            response: completion.text,
            tokens_used: completion.tokens,
            response_time,
            cost,
            timestamp: Utc::now(),
        };

        info!(
            model = %result.model,
            tokens = result.tokens_used,
            elapsed = %format_seconds(result.response_time),
            cost = result.cost,
            "Chat completed"
        );

        self.history.record(result.clone());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProviderEndpoint, ProvidersConfig};
    use crate::prompt::PromptTemplate;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_with(endpoints: ProvidersConfig) -> ChatService {
        ChatService::new(
            FaqStore::empty("unused.json"),
            ProviderRouter::new(endpoints),
            PromptStore::in_memory(PromptTemplate::default()),
        )
    }

    #[tokio::test]
    async fn test_unsupported_model_records_nothing() {
        let service = service_with(ProvidersConfig::default());
        let req = ChatRequest::new("hi", "mistral-large", Some("key".into()));
        let err = service.chat(&req).await.unwrap_err();
        assert!(matches!(err, ChatbenchError::UnsupportedModel(_)));
        assert!(service.history.is_empty());
    }

    #[tokio::test]
    async fn test_missing_key_records_nothing() {
        let service = service_with(ProvidersConfig::default());
        let req = ChatRequest::new("hi", "gemini-pro", None);
        let err = service.chat(&req).await.unwrap_err();
        assert!(matches!(err, ChatbenchError::MissingCredential(_)));
        assert!(service.history.is_empty());
    }

    #[tokio::test]
    async fn test_successful_chat_is_priced_and_recorded() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "[null]"}}],
                "usage": {"total_tokens": 1000}
            })))
            .mount(&mock_server)
            .await;

        let service = service_with(ProvidersConfig {
            openai: Some(ProviderEndpoint { base_url: Some(mock_server.uri()), api_key: None }),
            ..Default::default()
        });
        let req = ChatRequest::new("오늘 날씨 어때?", "gpt-4", Some("sk-test".into()));
        let result = service.chat(&req).await.unwrap();

        assert_eq!(result.model, "gpt-4");
        assert_eq!(result.response, "[null]");
        assert_eq!(result.tokens_used, 1000);
        assert!((result.cost - 0.045).abs() < 1e-9);
        assert!(result.response_time >= 0.0);
        assert_eq!(service.history.all().history, vec![result]);
    }

    #[tokio::test]
    async fn test_provider_failure_records_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": {"message": "upstream exploded"}
            })))
            .mount(&mock_server)
            .await;

        let service = service_with(ProvidersConfig {
            openai: Some(ProviderEndpoint { base_url: Some(mock_server.uri()), api_key: None }),
            ..Default::default()
        });
        let req = ChatRequest::new("hi", "gpt-4", Some("sk-test".into()));
        let err = service.chat(&req).await.unwrap_err();
        assert!(err.to_string().contains("upstream exploded"));
        assert!(service.history.is_empty());
    }
}

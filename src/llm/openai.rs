use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use crate::errors::ChatbenchError;
use super::provider::{read_response, LLMProvider};
use super::types::{Completion, CompletionParams, ProviderKind};
use tracing::debug;

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIProvider {
    pub fn with_base_url(client: Client, api_key: &str, model: &str, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            model: model.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete(
        &self,
        system: &str,
        message: &str,
        params: &CompletionParams,
    ) -> Result<Completion, ChatbenchError> {
        let body = json!({
            "model": self.model,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": message},
            ],
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        let resp = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatbenchError::Network(format!("OpenAI request failed: {}", e)))?;

        let data = read_response(resp, ProviderKind::OpenAi).await?;

        let text = data["choices"][0]["message"]["content"].as_str()
            .ok_or_else(|| ChatbenchError::ProviderCall("No content in OpenAI response".into()))?
            .to_string();
        let tokens = data["usage"]["total_tokens"].as_u64()
            .ok_or_else(|| ChatbenchError::ProviderCall("No usage in OpenAI response".into()))?;

        debug!(model = %self.model, tokens, "OpenAI completion");

        Ok(Completion { text, tokens })
    }

    fn kind(&self) -> ProviderKind { ProviderKind::OpenAi }
    fn model_name(&self) -> &str { &self.model }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn params() -> CompletionParams {
        CompletionParams { temperature: 0.1, max_tokens: 500 }
    }

    #[tokio::test]
    async fn test_complete_reports_exact_usage() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("Authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "gpt-4",
                "temperature": 0.1,
                "max_tokens": 500,
                "messages": [
                    {"role": "system", "content": "system prompt"},
                    {"role": "user", "content": "포인트 지급일?"}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "리뷰 검수 후 지급됩니다."}}],
                "usage": {"prompt_tokens": 40, "completion_tokens": 12, "total_tokens": 52}
            })))
            .mount(&mock_server)
            .await;

        let provider = OpenAIProvider::with_base_url(Client::new(), "sk-test", "gpt-4", &mock_server.uri());
        let completion = provider.complete("system prompt", "포인트 지급일?", &params()).await.unwrap();
        assert_eq!(completion.text, "리뷰 검수 후 지급됩니다.");
        assert_eq!(completion.tokens, 52);
    }

    #[tokio::test]
    async fn test_complete_unauthorized() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"message": "Incorrect API key provided: sk-bad", "code": "invalid_api_key"}
            })))
            .mount(&mock_server)
            .await;

        let provider = OpenAIProvider::with_base_url(Client::new(), "sk-bad", "gpt-4", &mock_server.uri());
        let err = provider.complete("s", "m", &params()).await.unwrap_err();
        assert!(matches!(err, ChatbenchError::Authentication(_)));
        assert_eq!(err.to_string(), "Authentication error: Incorrect API key provided: sk-bad");
    }

    #[tokio::test]
    async fn test_complete_rate_limited_keeps_provider_text() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"message": "You exceeded your current quota", "type": "insufficient_quota"}
            })))
            .mount(&mock_server)
            .await;

        let provider = OpenAIProvider::with_base_url(Client::new(), "sk-test", "gpt-4", &mock_server.uri());
        let err = provider.complete("s", "m", &params()).await.unwrap_err();
        assert!(matches!(err, ChatbenchError::RateLimit(_)));
        assert!(err.to_string().contains("You exceeded your current quota"));
    }

    #[tokio::test]
    async fn test_complete_unauthorized_without_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let provider = OpenAIProvider::with_base_url(Client::new(), "sk-bad", "gpt-4", &mock_server.uri());
        let err = provider.complete("s", "m", &params()).await.unwrap_err();
        assert_eq!(err.to_string(), "Authentication error: Invalid OpenAI API key");
    }

    #[tokio::test]
    async fn test_complete_without_usage() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "ok"}}]
            })))
            .mount(&mock_server)
            .await;

        let provider = OpenAIProvider::with_base_url(Client::new(), "sk-test", "gpt-4", &mock_server.uri());
        let err = provider.complete("s", "m", &params()).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider error: No usage in OpenAI response");
    }

    #[tokio::test]
    async fn test_complete_api_error_is_verbatim() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {"message": "The model `gpt-9` does not exist"}
            })))
            .mount(&mock_server)
            .await;

        let provider = OpenAIProvider::with_base_url(Client::new(), "sk-test", "gpt-9", &mock_server.uri());
        let err = provider.complete("s", "m", &params()).await.unwrap_err();
        assert_eq!(err.to_string(), "Provider error: The model `gpt-9` does not exist");
    }
}

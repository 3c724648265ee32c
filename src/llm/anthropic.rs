use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use crate::errors::ChatbenchError;
use super::provider::{read_response, LLMProvider};
use super::tokens::estimate_tokens;
use super::types::{Completion, CompletionParams, ProviderKind};
use tracing::debug;

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicProvider {
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
impl LLMProvider for AnthropicProvider {
    async fn complete(
        &self,
        system: &str,
        message: &str,
        params: &CompletionParams,
    ) -> Result<Completion, ChatbenchError> {
        let body = json!({
            "model": self.model,
            "system": system,
            "messages": [{"role": "user", "content": message}],
            "temperature": params.temperature,
            "max_tokens": params.max_tokens,
        });

        let resp = self.client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatbenchError::Network(format!("Anthropic API request failed: {}", e)))?;

        let data = read_response(resp, ProviderKind::Anthropic).await?;

        let text = data["content"][0]["text"].as_str()
            .ok_or_else(|| ChatbenchError::ProviderCall("No content in Anthropic response".into()))?
            .to_string();

        let tokens = estimate_tokens(&[system, message, &text]);
        debug!(model = %self.model, tokens, "Anthropic completion (estimated tokens)");

        Ok(Completion { text, tokens })
    }

    fn kind(&self) -> ProviderKind { ProviderKind::Anthropic }
    fn model_name(&self) -> &str { &self.model }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_complete_estimates_tokens() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("x-api-key", "sk-ant-test"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_partial_json(json!({
                "model": "claude-3-haiku",
                "system": "answer from the faq",
                "max_tokens": 300
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "text", "text": "[null]"}],
                "usage": {"input_tokens": 999, "output_tokens": 999}
            })))
            .mount(&mock_server)
            .await;

        let provider = AnthropicProvider::with_base_url(
            Client::new(), "sk-ant-test", "claude-3-haiku", &mock_server.uri(),
        );
        let params = CompletionParams { temperature: 0.0, max_tokens: 300 };
        let completion = provider.complete("answer from the faq", "what is the weather", &params).await.unwrap();
        assert_eq!(completion.text, "[null]");
        // (4 + 4 + 1) words * 1.3 = 11.7
        assert_eq!(completion.tokens, 12);
    }

    #[tokio::test]
    async fn test_complete_error_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "type": "error",
                "error": {"type": "invalid_request_error", "message": "credit balance is too low"}
            })))
            .mount(&mock_server)
            .await;

        let provider = AnthropicProvider::with_base_url(Client::new(), "k", "claude-3-opus", &mock_server.uri());
        let params = CompletionParams { temperature: 0.1, max_tokens: 500 };
        let err = provider.complete("s", "m", &params).await.unwrap_err();
        assert!(err.to_string().contains("credit balance is too low"));
    }

    #[tokio::test]
    async fn test_complete_rate_limited() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&mock_server)
            .await;

        let provider = AnthropicProvider::with_base_url(Client::new(), "k", "claude-3-opus", &mock_server.uri());
        let params = CompletionParams { temperature: 0.1, max_tokens: 500 };
        let err = provider.complete("s", "m", &params).await.unwrap_err();
        assert!(matches!(err, ChatbenchError::RateLimit(_)));
        assert_eq!(err.to_string(), "Rate limited: Anthropic rate limit exceeded");
    }

    #[tokio::test]
    async fn test_complete_unauthorized_keeps_provider_text() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "type": "error",
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            })))
            .mount(&mock_server)
            .await;

        let provider = AnthropicProvider::with_base_url(Client::new(), "k", "claude-3-opus", &mock_server.uri());
        let params = CompletionParams { temperature: 0.1, max_tokens: 500 };
        let err = provider.complete("s", "m", &params).await.unwrap_err();
        assert_eq!(err.to_string(), "Authentication error: invalid x-api-key");
    }
}

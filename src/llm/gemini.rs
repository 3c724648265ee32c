use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use crate::errors::ChatbenchError;
use super::provider::{read_response, LLMProvider};
use super::tokens::estimate_tokens;
use super::types::{Completion, CompletionParams, ProviderKind};
use tracing::debug;

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
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
impl LLMProvider for GeminiProvider {
    async fn complete(
        &self,
        system: &str,
        message: &str,
        params: &CompletionParams,
    ) -> Result<Completion, ChatbenchError> {
        // No separate system role here; the prompt is sent as one user turn.
        let prompt = format!("{}\n\nUser: {}", system, message);

        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": prompt}]}],
            "generationConfig": {
                "temperature": params.temperature,
                "maxOutputTokens": params.max_tokens,
            }
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let resp = self.client.post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatbenchError::Network(format!("Gemini request failed: {}", e.without_url())))?;

        let data = read_response(resp, ProviderKind::Google).await?;

        let text = data["candidates"][0]["content"]["parts"][0]["text"].as_str()
            .ok_or_else(|| ChatbenchError::ProviderCall("No content in Gemini response".into()))?
            .to_string();

        let tokens = estimate_tokens(&[system, message, &text]);
        debug!(model = %self.model, tokens, "Gemini completion (estimated tokens)");

        Ok(Completion { text, tokens })
    }

    fn kind(&self) -> ProviderKind { ProviderKind::Google }
    fn model_name(&self) -> &str { &self.model }
}

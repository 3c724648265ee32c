use reqwest::Client;
use crate::config::credentials::mask_key;
use crate::config::{ProviderEndpoint, ProvidersConfig};
use crate::errors::ChatbenchError;
use super::anthropic::AnthropicProvider;
use super::catalog;
use super::gemini::GeminiProvider;
use super::openai::OpenAIProvider;
use super::provider::LLMProvider;
use super::types::ProviderKind;
use tracing::debug;

/// Maps model ids to provider variants and builds a client for one call.
#[derive(Clone)]
pub struct ProviderRouter {
    client: Client,
    endpoints: ProvidersConfig,
}

impl Default for ProviderRouter {
    fn default() -> Self {
        Self::new(ProvidersConfig::default())
    }
}

impl ProviderRouter {
    pub fn new(endpoints: ProvidersConfig) -> Self {
        Self {
            client: Client::new(),
            endpoints,
        }
    }

    pub fn resolve(&self, model: &str) -> Result<ProviderKind, ChatbenchError> {
        catalog::provider_for_model(model)
            .ok_or_else(|| ChatbenchError::UnsupportedModel(model.to_string()))
    }

    fn endpoint(&self, kind: ProviderKind) -> Option<&ProviderEndpoint> {
        match kind {
            ProviderKind::OpenAi => self.endpoints.openai.as_ref(),
            ProviderKind::Anthropic => self.endpoints.anthropic.as_ref(),
            ProviderKind::Google => self.endpoints.google.as_ref(),
        }
    }

    /// Request key when present, otherwise the key configured for the provider.
    fn select_key<'a>(&'a self, kind: ProviderKind, request_key: Option<&'a str>) -> Option<&'a str> {
        request_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| self.endpoint(kind).and_then(|e| e.api_key.as_deref()))
            .filter(|k| !k.trim().is_empty())
    }

    pub fn create_provider(
        &self,
        model: &str,
        api_key: Option<&str>,
    ) -> Result<Box<dyn LLMProvider>, ChatbenchError> {
        let kind = self.resolve(model)?;
        let key = self
            .select_key(kind, api_key)
            .ok_or_else(|| ChatbenchError::MissingCredential(kind.display_name().to_string()))?;
        let base_url = self
            .endpoint(kind)
            .and_then(|e| e.base_url.as_deref())
            .unwrap_or(kind.default_base_url());

        debug!(provider = %kind, model, base_url, key = %mask_key(key), "Creating provider");

        let client = self.client.clone();
        let provider: Box<dyn LLMProvider> = match kind {
            ProviderKind::OpenAi => Box::new(OpenAIProvider::with_base_url(client, key, model, base_url)),
            ProviderKind::Anthropic => Box::new(AnthropicProvider::with_base_url(client, key, model, base_url)),
            ProviderKind::Google => Box::new(GeminiProvider::with_base_url(client, key, model, base_url)),
        };
        Ok(provider)
    }
}

use async_trait::async_trait;
use reqwest::Response;
use serde_json::Value;
use crate::errors::ChatbenchError;
use super::types::{Completion, CompletionParams, ProviderKind};

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// One completion call: `system` carries the rendered FAQ prompt,
    /// `message` the operator's question.
    async fn complete(
        &self,
        system: &str,
        message: &str,
        params: &CompletionParams,
    ) -> Result<Completion, ChatbenchError>;

    fn kind(&self) -> ProviderKind;

    /// Model identifier
    fn model_name(&self) -> &str;
}

/// `error.message` of a provider error body.
fn error_message(data: &Value) -> Option<String> {
    data.get("error")?.get("message")?.as_str().map(str::to_string)
}

/// Read a provider reply and map failures. The provider's own error text is
/// passed through; fixed messages are used only when the body has none.
pub(crate) async fn read_response(resp: Response, kind: ProviderKind) -> Result<Value, ChatbenchError> {
    let name = kind.display_name();
    let status = resp.status().as_u16();
    let raw = resp.text().await.map_err(|e| {
        ChatbenchError::Network(format!("Failed to read {} response: {}", name, e.without_url()))
    })?;

    let parsed = serde_json::from_str::<Value>(&raw);
    let detail = parsed.as_ref().ok().and_then(error_message);

    match status {
        429 => {
            return Err(ChatbenchError::RateLimit(
                detail.unwrap_or_else(|| format!("{} rate limit exceeded", name)),
            ))
        }
        401 => {
            return Err(ChatbenchError::Authentication(
                detail.unwrap_or_else(|| format!("Invalid {} API key", name)),
            ))
        }
        403 if kind == ProviderKind::Google => {
            return Err(ChatbenchError::Authentication(
                detail.unwrap_or_else(|| format!("Invalid {} API key", name)),
            ))
        }
        _ => {}
    }

    let data = parsed
        .map_err(|e| ChatbenchError::ProviderCall(format!("Failed to parse {} response: {}", name, e)))?;

    if data.get("error").is_some() {
        return Err(ChatbenchError::ProviderCall(detail.unwrap_or_else(|| "Unknown error".into())));
    }

    Ok(data)
}

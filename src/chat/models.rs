use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::llm::CompletionParams;

pub const DEFAULT_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_MAX_TOKENS: u32 = 500;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub model: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, model: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            message: message.into(),
            model: model.into(),
            api_key,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn params(&self) -> CompletionParams {
        CompletionParams {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

/// Outcome of one successful chat call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestResult {
    pub model: String,
    pub response: String,
    pub tokens_used: u64,
    /// Seconds.
    pub response_time: f64,
    pub cost: f64,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi", "model": "gpt-4"}"#).unwrap();
        assert_eq!(req.temperature, 0.1);
        assert_eq!(req.max_tokens, 500);
        assert!(req.api_key.is_none());
    }

    #[test]
    fn test_request_requires_model() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"message": "hi"}"#).is_err());
    }
}

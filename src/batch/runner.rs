use serde::{Deserialize, Serialize};
use crate::chat::{ChatRequest, ChatService};
use crate::llm::catalog::provider_for_model;
use crate::llm::ProviderKind;
use super::summary::{summarize, BatchSummary};
use tracing::{info, warn};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiKeyConfig {
    pub openai_key: Option<String>,
    pub anthropic_key: Option<String>,
    pub google_key: Option<String>,
}

impl ApiKeyConfig {
    pub fn key_for(&self, kind: ProviderKind) -> Option<&str> {
        match kind {
            ProviderKind::OpenAi => self.openai_key.as_deref(),
            ProviderKind::Anthropic => self.anthropic_key.as_deref(),
            ProviderKind::Google => self.google_key.as_deref(),
        }
    }

    /// Key for a model id; unresolvable models get none and fail downstream.
    pub fn key_for_model(&self, model: &str) -> Option<String> {
        provider_for_model(model)
            .and_then(|kind| self.key_for(kind))
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub test_queries: Vec<String>,
    pub models: Vec<String>,
    #[serde(default)]
    pub api_config: ApiKeyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum BatchOutcome {
    Success {
        query: String,
        model: String,
        response: String,
        tokens: u64,
        cost: f64,
        time: f64,
    },
    Failure {
        query: String,
        model: String,
        error: String,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub results: Vec<BatchOutcome>,
    pub summary: BatchSummary,
}

/// Run every (query, model) pair, query-major, one call at a time.
pub async fn run_batch(service: &ChatService, request: &BatchRequest) -> BatchReport {
    let batch_id = uuid::Uuid::new_v4().to_string();
    info!(
        batch_id = %batch_id,
        queries = request.test_queries.len(),
        models = request.models.len(),
        "Starting batch test"
    );

    let mut results = Vec::with_capacity(request.test_queries.len() * request.models.len());

    for query in &request.test_queries {
        for model in &request.models {
            let chat_request = ChatRequest::new(
                query.clone(),
                model.clone(),
                request.api_config.key_for_model(model),
            );

            let outcome = match service.chat(&chat_request).await {
                Ok(result) => BatchOutcome::Success {
                    query: query.clone(),
                    model: model.clone(),
                    response: result.response,
                    tokens: result.tokens_used,
                    cost: result.cost,
                    time: result.response_time,
                },
                Err(e) => {
                    warn!(batch_id = %batch_id, model = %model, error = %e, "Batch pair failed");
                    BatchOutcome::Failure {
                        query: query.clone(),
                        model: model.clone(),
                        error: e.to_string(),
                    }
                }
            };
            results.push(outcome);
        }
    }

    let summary = summarize(&results);
    info!(
        batch_id = %batch_id,
        total = summary.total_tests,
        successful = summary.successful_tests,
        failed = summary.failed_tests,
        total_cost = summary.total_cost,
        "Batch test finished"
    );

    BatchReport { results, summary }
}

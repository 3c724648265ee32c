use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::cost::ModelPrice;
use crate::llm::ProviderKind;

#[derive(Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub count: usize,
}

/// Rendered prompt alongside the template it came from.
#[derive(Serialize)]
pub struct PromptResponse {
    pub prompt: String,
    pub length: usize,
    pub template: String,
    pub version: u64,
    pub last_modified: DateTime<Utc>,
}

#[derive(Deserialize)]
pub struct PromptUpdate {
    pub template: String,
}

#[derive(Deserialize)]
pub struct CostQuery {
    pub monthly_queries: Option<u64>,
    pub avg_tokens: Option<u64>,
}

#[derive(Serialize)]
pub struct ModelEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub provider: ProviderKind,
    pub pricing: Option<ModelPrice>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

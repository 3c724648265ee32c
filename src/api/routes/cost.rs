use axum::Json;
use serde_json::{json, Value};
use crate::api::extract::ApiQuery;
use crate::api::models::{CostQuery, ModelEntry};
use crate::cost::{
    estimate_monthly_costs, get_price, CostEstimation, DEFAULT_AVG_TOKENS_PER_QUERY,
    DEFAULT_MONTHLY_QUERIES,
};
use crate::llm::catalog::MODELS;

pub async fn cost_estimation(ApiQuery(query): ApiQuery<CostQuery>) -> Json<CostEstimation> {
    let monthly_queries = query.monthly_queries.unwrap_or(DEFAULT_MONTHLY_QUERIES);
    let avg_tokens = query.avg_tokens.unwrap_or(DEFAULT_AVG_TOKENS_PER_QUERY);
    Json(estimate_monthly_costs(monthly_queries, avg_tokens))
}

pub async fn list_models() -> Json<Value> {
    let models: Vec<ModelEntry> = MODELS
        .iter()
        .map(|m| ModelEntry {
            id: m.id,
            label: m.label,
            provider: m.provider,
            pricing: get_price(m.id).copied(),
        })
        .collect();
    let total = models.len();
    Json(json!({ "models": models, "total": total }))
}

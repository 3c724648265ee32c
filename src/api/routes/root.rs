use axum::Json;
use serde_json::{json, Value};
use crate::api::models::BannerResponse;
use crate::api::{API_VERSION, SERVICE_NAME};

pub async fn banner() -> Json<BannerResponse> {
    Json(BannerResponse {
        message: SERVICE_NAME,
        version: API_VERSION,
    })
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "chatbench",
        "build": option_env!("GIT_HASH").unwrap_or("dev"),
    }))
}

//! Credential-free stand-in for front-end work: no provider calls, a fixed
//! chat reply, and FAQ data read straight from disk.

use std::path::PathBuf;
use std::sync::Arc;
use axum::extract::State;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;
use crate::api::extract::ApiJson;
use crate::api::routes::root::banner;
use crate::chat::TestResult;
use crate::faq::{FaqSnapshot, FaqStore};
use tracing::warn;

pub const PLACEHOLDER_RESPONSE: &str = "죄송합니다. 현재 AI 모델이 연결되지 않았습니다. 테스트 응답입니다.";

#[derive(Clone)]
pub struct FallbackState {
    pub faq_path: Arc<PathBuf>,
}

pub fn build_fallback_router(faq_path: PathBuf) -> Router {
    Router::new()
        .route("/", axum::routing::get(banner))
        .route("/api/faq-data", axum::routing::get(faq_data))
        .route("/api/chat", axum::routing::post(placeholder_chat))
        .with_state(FallbackState { faq_path: Arc::new(faq_path) })
}

async fn faq_data(State(state): State<FallbackState>) -> Json<FaqSnapshot> {
    match FaqStore::load(state.faq_path.as_path()).await {
        Ok(store) => Json(store.get().await),
        Err(e) => {
            warn!(path = %state.faq_path.display(), error = %e, "Fallback could not read FAQ data");
            Json(FaqSnapshot { data: Default::default(), count: 0 })
        }
    }
}

async fn placeholder_chat(ApiJson(body): ApiJson<Value>) -> Json<TestResult> {
    let model = body["model"].as_str().unwrap_or("gpt-4").to_string();
    Json(TestResult {
        model,
        response: PLACEHOLDER_RESPONSE.to_string(),
        tokens_used: 50,
        response_time: 0.5,
        cost: 0.001,
        timestamp: Utc::now(),
    })
}

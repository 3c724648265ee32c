pub mod routes;
pub mod models;
pub mod errors;
pub mod extract;
pub mod fallback;

use std::path::Path;
use std::sync::Arc;
use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use crate::chat::ChatService;
use crate::config::ChatbenchConfig;
use crate::errors::ChatbenchError;
use crate::faq::FaqStore;
use crate::llm::ProviderRouter;
use crate::prompt::{PromptStore, PromptTemplate};

pub const SERVICE_NAME: &str = "SuperMembers Chatbot Tester API";
pub const API_VERSION: &str = "1.0.0";

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ChatService>,
}

impl AppState {
    pub fn new(service: ChatService) -> Self {
        Self { service: Arc::new(service) }
    }
}

pub async fn create_app_state(config: &ChatbenchConfig, faq_path: &Path) -> Result<AppState, ChatbenchError> {
    let faq = FaqStore::load(faq_path).await?;
    let prompt = match &config.prompt {
        Some(prompt) => PromptStore::load(&prompt.template_path).await?,
        None => PromptStore::in_memory(PromptTemplate::default()),
    };
    let router = ProviderRouter::new(config.providers.clone().unwrap_or_default());

    Ok(AppState::new(ChatService::new(faq, router, prompt)))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(routes::root::banner))
        .route("/api/health", axum::routing::get(routes::root::health_check))
        .route("/api/upload-faq", axum::routing::post(routes::faq::upload_faq))
        .route("/api/faq-data", axum::routing::get(routes::faq::get_faq_data))
        .route("/api/prompt", axum::routing::get(routes::prompt::get_prompt).put(routes::prompt::update_prompt))
        .route("/api/models", axum::routing::get(routes::cost::list_models))
        .route("/api/chat", axum::routing::post(routes::chat::chat))
        .route("/api/test-history", axum::routing::get(routes::chat::test_history))
        .route("/api/batch-test", axum::routing::post(routes::batch::batch_test))
        .route("/api/cost-estimation", axum::routing::get(routes::cost::cost_estimation))
        .route("/ws/chat", axum::routing::get(routes::ws::ws_chat))
        .with_state(state)
}

/// One allowed origin with credentials. Wildcards cannot be combined with
/// credentials, so requested methods and headers are mirrored back.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ChatbenchError> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|e| ChatbenchError::Config(format!("Invalid CORS origin {}: {}", origin, e)))?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use crate::api::models::ErrorResponse;
use crate::api::AppState;
use crate::chat::{ChatRequest, TestResult};
use crate::errors::ChatbenchError;
use crate::history::HistorySnapshot;

/// Every failure on this path, an unreadable body included, is a server
/// error carrying the error text.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<TestResult>, (StatusCode, Json<ErrorResponse>)> {
    let server_error = |e: ChatbenchError| {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse { error: e.to_string() }))
    };

    let Json(request) = payload.map_err(|e| server_error(e.into()))?;
    state.service.chat(&request).await
        .map(Json)
        .map_err(server_error)
}

pub async fn test_history(State(state): State<AppState>) -> Json<HistorySnapshot> {
    Json(state.service.history.all())
}

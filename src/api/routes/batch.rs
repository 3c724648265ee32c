use axum::extract::State;
use axum::Json;
use crate::api::extract::ApiJson;
use crate::api::AppState;
use crate::batch::{run_batch, BatchReport, BatchRequest};

pub async fn batch_test(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<BatchRequest>,
) -> Json<BatchReport> {
    Json(run_batch(&state.service, &request).await)
}

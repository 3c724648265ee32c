use axum::extract::State;
use axum::Json;
use crate::api::extract::ApiJson;
use crate::api::models::{PromptResponse, PromptUpdate};
use crate::api::AppState;
use crate::errors::ChatbenchError;
use crate::prompt::PromptSnapshot;

pub async fn get_prompt(State(state): State<AppState>) -> Json<PromptResponse> {
    let snapshot = state.service.prompt.snapshot().await;
    Json(respond(&state, snapshot).await)
}

/// Replace the instruction template; the next chat uses it.
pub async fn update_prompt(
    State(state): State<AppState>,
    ApiJson(update): ApiJson<PromptUpdate>,
) -> Result<Json<PromptResponse>, ChatbenchError> {
    let snapshot = state.service.prompt.replace(&update.template).await?;
    Ok(Json(respond(&state, snapshot).await))
}

async fn respond(state: &AppState, snapshot: PromptSnapshot) -> PromptResponse {
    let prompt = state.service.current_prompt().await;
    PromptResponse {
        length: prompt.chars().count(),
        prompt,
        template: snapshot.template,
        version: snapshot.version,
        last_modified: snapshot.last_modified,
    }
}

use axum::extract::{Multipart, State};
use axum::Json;
use crate::api::models::UploadResponse;
use crate::api::AppState;
use crate::errors::ChatbenchError;
use crate::faq::{parse_upload, FaqSnapshot};
use tracing::{debug, info};

pub async fn upload_faq(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ChatbenchError> {
    while let Some(field) = multipart.next_field().await
        .map_err(|e| ChatbenchError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        if field.name() != Some("file") {
            debug!(field = ?field.name(), "Skipping multipart field");
            continue;
        }

        let file_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await
            .map_err(|e| ChatbenchError::BadRequest(format!("Failed to read uploaded file: {}", e)))?;

        let data = parse_upload(&file_name, &bytes)?;
        let count = state.service.faq.replace(data).await?;
        info!(file = %file_name, count, "FAQ upload accepted");

        return Ok(Json(UploadResponse {
            message: "FAQ data uploaded successfully",
            count,
        }));
    }

    Err(ChatbenchError::BadRequest("No file uploaded".into()))
}

pub async fn get_faq_data(State(state): State<AppState>) -> Json<FaqSnapshot> {
    Json(state.service.faq.get().await)
}

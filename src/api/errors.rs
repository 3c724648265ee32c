use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use crate::errors::ChatbenchError;

impl IntoResponse for ChatbenchError {
    fn into_response(self) -> axum::response::Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

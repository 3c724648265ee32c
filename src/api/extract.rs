use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts};
use crate::errors::ChatbenchError;

/// `axum::Json` whose rejection renders as the usual `{"error"}` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ChatbenchError))]
pub struct ApiJson<T>(pub T);

/// `axum::extract::Query` with the same rejection handling.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ChatbenchError))]
pub struct ApiQuery<T>(pub T);

impl From<JsonRejection> for ChatbenchError {
    fn from(rejection: JsonRejection) -> Self {
        ChatbenchError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ChatbenchError {
    fn from(rejection: QueryRejection) -> Self {
        ChatbenchError::BadRequest(rejection.body_text())
    }
}

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use serde_json::json;
use crate::api::AppState;
use crate::chat::ChatRequest;
use crate::errors::ChatbenchError;
use tracing::{debug, info, warn};

pub async fn ws_chat(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| relay(socket, state))
}

/// One request per text frame, one reply per request. Request-level errors
/// are reported and the session continues; it ends on close or socket error.
async fn relay(mut socket: WebSocket, state: AppState) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    info!(conn_id = %conn_id, "WebSocket chat session opened");

    while let Some(frame) = socket.recv().await {
        let frame = match frame {
            Ok(frame) => frame,
            Err(e) => {
                debug!(conn_id = %conn_id, error = %e, "WebSocket receive failed");
                break;
            }
        };

        let reply = match frame {
            Message::Text(text) => handle_request(&state, &text).await,
            Message::Binary(_) => error_payload(&ChatbenchError::BadRequest(
                "Binary frames are not supported".into(),
            )),
            Message::Close(_) => break,
            Message::Ping(_) | Message::Pong(_) => continue,
        };

        if let Err(e) = socket.send(Message::Text(reply)).await {
            warn!(conn_id = %conn_id, error = %e, "WebSocket send failed");
            break;
        }
    }

    info!(conn_id = %conn_id, "WebSocket chat session closed");
}

async fn handle_request(state: &AppState, text: &str) -> String {
    let request: ChatRequest = match serde_json::from_str(text) {
        Ok(request) => request,
        Err(e) => return error_payload(&ChatbenchError::BadRequest(format!("Invalid chat request: {}", e))),
    };

    match state.service.chat(&request).await {
        Ok(result) => serde_json::to_string(&result)
            .unwrap_or_else(|e| error_payload(&ChatbenchError::Json(e))),
        Err(e) => error_payload(&e),
    }
}

fn error_payload(err: &ChatbenchError) -> String {
    json!({"error": err.to_string()}).to_string()
}

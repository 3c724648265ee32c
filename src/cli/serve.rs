use std::path::{Path, PathBuf};
use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::{self, ChatbenchConfig};
use crate::errors::ChatbenchError;
use tower_http::trace::TraceLayer;
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8001;

pub async fn handle_serve(args: ServeArgs) -> Result<(), ChatbenchError> {
    let file_config = match &args.config {
        Some(path) => config::parse_config(Path::new(path)).await?,
        None => ChatbenchConfig::default(),
    };

    let server = file_config.server.as_ref();
    let host = args.host.clone()
        .or_else(|| server.and_then(|s| s.host.clone()))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = args.port
        .or_else(|| server.and_then(|s| s.port))
        .unwrap_or(DEFAULT_PORT);
    let faq_path = args.faq.clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(file_config.faq_path()));

    info!(host = %host, port, faq = %faq_path.display(), "Starting API server");

    let state = api::create_app_state(&file_config, &faq_path).await?;
    let app = api::build_router(state)
        .layer(api::cors_layer(file_config.cors_origin())?)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ChatbenchError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}

use std::path::PathBuf;
use crate::api;
use crate::api::fallback::build_fallback_router;
use crate::cli::commands::FallbackArgs;
use crate::errors::ChatbenchError;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn handle_fallback(args: FallbackArgs) -> Result<(), ChatbenchError> {
    warn!("Fallback server answers every chat with a placeholder; no provider is called");

    let app = build_fallback_router(PathBuf::from(&args.faq))
        .layer(api::cors_layer(&args.cors_origin)?)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(faq = %args.faq, "Fallback server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ChatbenchError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}

//! HTTP front end
//!
//! - `GET /` — static question form
//! - `POST /ask` — form field `question`, answers with JSON
//! - `GET /health` — liveness probe

mod handlers;

use axum::{
    Router,
    routing::{get, post},
};
use qa_application::AskQuestionUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use handlers::{AskForm, AskResponse};

/// Build the router over a shared use case
pub fn router(use_case: Arc<AskQuestionUseCase>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/ask", post(handlers::ask))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(use_case)
}

/// Serve the web front end until Ctrl-C
pub async fn serve(addr: SocketAddr, use_case: Arc<AskQuestionUseCase>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Web front end listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(use_case))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(e) => {
            warn!("Cannot listen for Ctrl-C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

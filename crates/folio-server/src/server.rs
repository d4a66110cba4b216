//! Router assembly and the listener loop

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use folio_core::ErrorBody;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{chat, content, health, resume};
use crate::state::AppState;

/// Bind and serve until the process is stopped
pub async fn run_server(state: AppState, host: &str, port: u16, cors: bool) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let app = create_router(state, cors);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Folio server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn create_router(state: AppState, cors: bool) -> Router {
    let router = Router::new()
        .route("/health", get(health::health))
        .route("/api/chat", post(chat::chat))
        .route("/api/posts", get(content::list_posts))
        .route("/api/posts/:slug", get(content::get_post))
        .route("/resume/file", get(resume::resume_file))
        .route("/sitemap.xml", get(content::sitemap))
        .route("/robots.txt", get(content::robots))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state));

    if cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new("Failed to get response")),
    )
        .into_response()
}

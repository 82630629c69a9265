//! HTTP server setup: router, middleware and lifecycle.

use axum::http::StatusCode;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::boards::{get_board, method_not_allowed, post_command, preflight};
use super::cors::cors_headers;
use super::state::ApiState;

/// The single resource served by this API.
pub const TIMERS_ROUTE: &str = "/api/boards/{board_id}/timers";

/// Build the router.
///
/// Routes:
/// - `OPTIONS /api/boards/{board_id}/timers` - CORS preflight (204)
/// - `GET     /api/boards/{board_id}/timers` - Current board
/// - `POST    /api/boards/{board_id}/timers` - Apply a command, return the board
///
/// Other methods on the route answer 405, HEAD included (axum would otherwise
/// serve it from the GET handler). Other paths, and an empty board id, answer
/// 404. Every response, errors included, carries the CORS headers.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            TIMERS_ROUTE,
            get(get_board)
                .head(method_not_allowed)
                .post(post_command)
                .options(preflight),
        )
        .fallback(not_found)
        .layer(middleware::from_fn(cors_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Start the HTTP server on the given address.
///
/// Returns a handle that resolves when the server shuts down. The caller
/// passes a `tokio::sync::watch::Receiver<bool>` for graceful shutdown.
pub async fn start_http_server(
    bind: SocketAddr,
    state: Arc<ApiState>,
    shutdown_rx: tokio::sync::watch::Receiver<bool>,
) -> std::io::Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(bind = %local_addr, "HTTP server listening");

    let handle = tokio::spawn(async move {
        let mut shutdown = shutdown_rx;
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.wait_for(|v| *v).await;
            })
            .await
        {
            tracing::error!(error = %e, "HTTP server stopped with an error");
        }
    });

    Ok((local_addr, handle))
}

use std::io;

use axum::Router;
use axum::middleware;
use axum::routing::any;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tracing::info;
use tracing::warn;

use crate::cors::cors;
use crate::error::panic_response;
use crate::handlers;
use crate::state::FunctionState;

pub fn router(state: FunctionState) -> Router {
    Router::new()
        .route("/health", any(handlers::health))
        .fallback(handlers::invoke)
        // Inside the CORS layer so panic responses carry the CORS header too.
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(cors))
        .with_state(state)
}

/// Serves the function on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, state: FunctionState) -> io::Result<()> {
    let addr = listener.local_addr()?;
    info!(
        "Serving {} ({}) on http://{addr}",
        state.config().function_name,
        state.config().agent_name
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

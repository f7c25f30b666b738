use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::routes::{flashcard, health, images, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/flashcard", get(flashcard))
        .route("/api/images", get(images))
        .route("/health", get(health))
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}

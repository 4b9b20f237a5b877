// src/server.rs
// Metrics exposition over HTTP.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use prometheus::{Encoder, Registry, TextEncoder};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::error::Result;

#[derive(Clone)]
pub struct AppState {
    registry: Arc<Registry>,
    metrics_path: Arc<str>,
}

impl AppState {
    pub fn new(registry: Arc<Registry>, metrics_path: &str) -> Self {
        Self { registry, metrics_path: Arc::from(metrics_path) }
    }
}

pub fn router(state: AppState) -> Router {
    let mut router = Router::new().route(&state.metrics_path, get(metrics));
    // Any other path points the caller at the metrics path.
    if &*state.metrics_path != "/" {
        router = router.fallback(redirect_to_metrics);
    }
    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Gather and encode in Prometheus text format. Blocks for a full scrape.
pub fn encode(registry: &Registry) -> Result<String> {
    let families = registry.gather();
    Ok(TextEncoder::new().encode_to_string(&families)?)
}

async fn metrics(State(state): State<AppState>) -> Response {
    // gather() fetches the modem page synchronously; keep it off the async workers.
    let registry = Arc::clone(&state.registry);
    match tokio::task::spawn_blocking(move || encode(&registry)).await {
        Ok(Ok(body)) => {
            ([(header::CONTENT_TYPE, TextEncoder::new().format_type().to_string())], body).into_response()
        }
        Ok(Err(e)) => {
            loge!("Exposition: failed to encode metrics: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
        Err(e) => {
            loge!("Exposition: gather task failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

async fn redirect_to_metrics(State(state): State<AppState>) -> Response {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, state.metrics_path.to_string())]).into_response()
}

pub async fn serve(listen_address: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(listen_address).await?;
    logf!("exporter listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    logf!("exporter stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        loge!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}

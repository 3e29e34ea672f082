//! HTTP API server for the practice scoring service.
//!
//! Exposes a liveness probe and the practice scoring endpoint, with
//! structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use inference::{InferenceService, MockScorer, PracticeScorer};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use routes::inference::AppState;

/// Builds the route table once at startup.
///
/// | Method | Path               |
/// |--------|--------------------|
/// | GET    | `/health`          |
/// | POST   | `/inference/score` |
/// | GET    | `/metrics`         |
pub fn create_app<S: PracticeScorer + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
    config: &Config,
) -> Router {
    let inference_router = Router::new()
        .route("/score", post(routes::inference::score::<S>))
        .with_state(state);

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .nest("/inference", inference_router)
        .merge(metrics_router)
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates application state backed by the placeholder scorer.
pub fn create_default_state() -> Arc<AppState<MockScorer>> {
    create_state(MockScorer::new())
}

/// Creates application state around an arbitrary scorer.
pub fn create_state<S: PracticeScorer>(scorer: S) -> Arc<AppState<S>> {
    Arc::new(AppState {
        inference: InferenceService::new(scorer),
    })
}

//! Health check and metrics endpoints.
//!
//! Used by load balancers and Prometheus; neither touches the session.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode};
use metrics_exporter_prometheus::PrometheusHandle;

/// Simple health check endpoint (for basic liveness).
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Prometheus scrape endpoint.
///
/// # Endpoint
///
/// ```text
/// GET /metrics
/// ```
///
/// # Errors
///
/// Returns 404 when no recorder was installed at startup.
#[allow(clippy::unused_async)]
pub async fn metrics_endpoint(State(app): State<AppState>) -> Result<String, AppError> {
    app.metrics
        .as_ref()
        .map(PrometheusHandle::render)
        .ok_or_else(|| AppError::not_found("Metrics are disabled"))
}

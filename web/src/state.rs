//! Shared application state for Axum handlers.

use crate::config::SessionConfig;
use crate::views::Views;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_sessions_moka_store::MokaStore;

/// Application state shared across all handlers.
///
/// Cheap to clone: the templates sit behind an `Arc` and the session store
/// is itself a shared handle.
#[derive(Clone)]
pub struct AppState {
    /// Compiled page templates
    pub views: Arc<Views>,
    /// Session storage. Records are evicted once their expiry passes, and
    /// the least recently used ones go first when `sessions.capacity` is hit.
    pub session_store: MokaStore,
    /// Session cookie settings
    pub sessions: SessionConfig,
    /// Prometheus handle, when a recorder is installed
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Creates state with an empty session store sized by `sessions`.
    #[must_use]
    pub fn new(views: Views, sessions: SessionConfig) -> Self {
        Self {
            views: Arc::new(views),
            session_store: MokaStore::new(Some(sessions.capacity)),
            sessions,
            metrics: None,
        }
    }

    /// Exposes `handle` at `/metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

//! Router configuration.
//!
//! Builds the complete Axum router with all endpoints, the session layer and
//! request tracking.

use crate::handlers::{health, lists, todos};
use crate::middleware::with_request_tracking;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};

/// Build the complete Axum router.
///
/// Sessions live in `state.session_store` and expire after the configured
/// idle time; every request is traced with a request id.
pub fn build_router(state: AppState) -> Router {
    let sessions = SessionManagerLayer::new(state.session_store.clone())
        .with_secure(state.sessions.secure_cookies)
        .with_expiry(Expiry::OnInactivity(Duration::seconds(state.sessions.idle_timeout_secs)));

    let app = Router::new()
        .route("/", get(lists::index))
        // Lists
        .route("/lists", get(lists::list_lists).post(lists::create_list))
        .route("/lists/new", get(lists::new_list))
        .route("/lists/:id", get(lists::show_list).post(lists::update_list))
        .route("/lists/:id/edit", get(lists::edit_list))
        .route("/lists/:id/delete", post(lists::delete_list))
        // Todos
        .route("/lists/:id/todos", post(todos::add_todo))
        .route("/lists/:id/todos/complete_all", post(todos::complete_all))
        .route("/lists/:id/todos/:todo_id/delete", post(todos::delete_todo))
        .route("/lists/:id/todos/:todo_id/check", post(todos::check_todo))
        // Operations (no session)
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics_endpoint))
        .layer(sessions)
        .with_state(state);

    with_request_tracking(app)
}

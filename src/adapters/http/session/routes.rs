//! HTTP routes for session endpoints.

use axum::{routing::patch, Router};

use super::handlers::{update_session_status, SessionHandlers};

/// Creates the session router with all endpoints.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/sessions/:session_id/status", patch(update_session_status))
        .with_state(handlers)
}

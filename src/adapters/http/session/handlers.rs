//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::session::{
    TransitionSessionStatusCommand, TransitionSessionStatusHandler,
};
use crate::domain::foundation::{SessionId, SessionStatus};
use crate::domain::session::SessionError;

use super::dto::{ErrorResponse, SessionResponse, UpdateSessionStatusRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SessionHandlers {
    transition_handler: Arc<TransitionSessionStatusHandler>,
}

impl SessionHandlers {
    pub fn new(transition_handler: Arc<TransitionSessionStatusHandler>) -> Self {
        Self { transition_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// PATCH /sessions/:session_id/status - Change a session's status
///
/// Entering `results` resolves eliminations and, for a finale, closes the season.
pub async fn update_session_status(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
    payload: Result<Json<UpdateSessionStatusRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response()
        }
    };
    let requested_status = req.requested_status();

    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        // An id that cannot exist is reported like any unknown session,
        // after the status itself has been checked.
        Err(_) => {
            return match requested_status.parse::<SessionStatus>() {
                Err(e) => handle_session_error(e.into()),
                Ok(_) => (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse::not_found("Session", &session_id)),
                )
                    .into_response(),
            };
        }
    };

    let cmd = TransitionSessionStatusCommand {
        session_id,
        status: requested_status,
    };

    match handlers.transition_handler.handle(cmd).await {
        Ok(result) => {
            let response = SessionResponse::from(&result.session);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_session_error(error: SessionError) -> Response {
    match error {
        SessionError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(format!(
                "Invalid {}: {}",
                field, message
            ))),
        )
            .into_response(),
        SessionError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id.to_string())),
        )
            .into_response(),
        SessionError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Session status update failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(msg)),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_validation_maps_to_400() {
        let error = SessionError::validation("status", "unknown session status 'paused'");
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn session_error_not_found_maps_to_404() {
        let error = SessionError::NotFound(SessionId::new());
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn session_error_infrastructure_maps_to_500() {
        let error = SessionError::infrastructure("connection reset");
        let response = handle_session_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

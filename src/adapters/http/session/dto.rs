//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::SessionStatus;
use crate::domain::session::Session;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to move a session to a new status.
///
/// `status` is kept as raw JSON so that any value, including a number or
/// `null`, reaches status validation and is reported as a bad request.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSessionStatusRequest {
    #[serde(default)]
    pub status: serde_json::Value,
}

impl UpdateSessionStatusRequest {
    /// The requested status as text; non-string values keep their JSON form.
    pub fn requested_status(&self) -> String {
        match &self.status {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Session as returned after a status change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionResponse {
    pub id: String,
    pub season_id: Option<String>,
    pub status: SessionStatus,
    pub is_finale: bool,
    pub pot_contribution: Option<i64>,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id().to_string(),
            season_id: session.season_id().map(ToString::to_string),
            status: session.status(),
            is_finale: session.is_finale(),
            pot_contribution: session.pot_contribution(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{SeasonId, SessionId};

    #[test]
    fn update_request_deserializes() {
        let req: UpdateSessionStatusRequest =
            serde_json::from_str(r#"{"status": "results"}"#).unwrap();
        assert_eq!(req.requested_status(), "results");
    }

    #[test]
    fn update_request_without_status_is_null() {
        let req: UpdateSessionStatusRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.requested_status(), "null");
    }

    #[test]
    fn non_string_status_keeps_json_form() {
        let req: UpdateSessionStatusRequest =
            serde_json::from_str(r#"{"status": 5}"#).unwrap();
        assert_eq!(req.requested_status(), "5");
        assert!(req.requested_status().parse::<SessionStatus>().is_err());
    }

    #[test]
    fn session_response_conversion() {
        let season_id = SeasonId::new();
        let session = Session::new(SessionId::new(), Some(season_id), true)
            .with_status(SessionStatus::Results)
            .with_pot_contribution(40);

        let response = SessionResponse::from(&session);

        assert_eq!(response.id, session.id().to_string());
        assert_eq!(response.season_id, Some(season_id.to_string()));
        assert_eq!(response.status, SessionStatus::Results);
        assert!(response.is_finale);
        assert_eq!(response.pot_contribution, Some(40));
    }

    #[test]
    fn session_response_serializes_lowercase_status() {
        let session = Session::new(SessionId::new(), None, false);
        let json = serde_json::to_value(SessionResponse::from(&session)).unwrap();

        assert_eq!(json["status"], "lobby");
        assert!(json["season_id"].is_null());
        assert!(json["pot_contribution"].is_null());
    }

    #[test]
    fn error_response_serializes() {
        let json = serde_json::to_string(&ErrorResponse::bad_request("Invalid status")).unwrap();
        assert_eq!(json, r#"{"code":"BAD_REQUEST","message":"Invalid status"}"#);
    }
}

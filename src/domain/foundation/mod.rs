//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, status enums, timestamps and error types
//! that form the vocabulary of the elimination tracker.

mod errors;
mod ids;
mod participant_status;
mod season_status;
mod session_status;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ParticipantId, SeasonId, SessionId, VoteId};
pub use participant_status::ParticipantStatus;
pub use season_status::SeasonStatus;
pub use session_status::SessionStatus;
pub use timestamp::Timestamp;

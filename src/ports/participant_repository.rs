//! Participant repository port.

use crate::domain::foundation::{DomainError, ParticipantId, ParticipantStatus, SessionId};
use crate::domain::participant::Participant;
use async_trait::async_trait;

/// Repository port for session participants.
///
/// Bulk methods take an id set and must treat an empty set as a no-op.
#[async_trait]
pub trait ParticipantRepository: Send + Sync {
    /// All participants of a session, in stable listing order.
    ///
    /// The order is the tie-break order for vote sorting, so implementations
    /// must return the same order on every call.
    async fn find_by_session(&self, session_id: &SessionId)
        -> Result<Vec<Participant>, DomainError>;

    /// Record one participant's tallied vote count.
    ///
    /// # Errors
    ///
    /// - `ParticipantNotFound` if the participant doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn record_vote_count(
        &self,
        id: &ParticipantId,
        vote_count: u32,
    ) -> Result<(), DomainError>;

    /// Set the status of every listed participant, leaving vote counts untouched.
    async fn set_status(
        &self,
        ids: &[ParticipantId],
        status: ParticipantStatus,
    ) -> Result<(), DomainError>;

    /// Mark every listed participant alive with a vote count of zero.
    async fn reset_standing(&self, ids: &[ParticipantId]) -> Result<(), DomainError>;
}

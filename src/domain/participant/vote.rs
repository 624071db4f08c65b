//! Vote entity. Votes are immutable once cast.

use crate::domain::foundation::{ParticipantId, SessionId, VoteId};
use serde::{Deserialize, Serialize};

/// A single vote cast against a participant within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    id: VoteId,
    session_id: SessionId,
    participant_id: ParticipantId,
}

impl Vote {
    /// Cast a new vote against `participant_id`.
    pub fn new(session_id: SessionId, participant_id: ParticipantId) -> Self {
        Self {
            id: VoteId::new(),
            session_id,
            participant_id,
        }
    }

    /// Reconstitute a vote from persistence.
    pub fn reconstitute(id: VoteId, session_id: SessionId, participant_id: ParticipantId) -> Self {
        Self {
            id,
            session_id,
            participant_id,
        }
    }

    pub fn id(&self) -> &VoteId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// The participant this vote targets.
    pub fn participant_id(&self) -> &ParticipantId {
        &self.participant_id
    }
}

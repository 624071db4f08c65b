//! Participant entity.

use crate::domain::foundation::{ParticipantId, ParticipantStatus, SessionId};
use serde::{Deserialize, Serialize};

/// A player taking part in one session.
///
/// `status` and `vote_count` are recomputed every time the owning session
/// enters the results phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    session_id: SessionId,
    player_number: i32,
    name: String,
    status: ParticipantStatus,
    vote_count: u32,
}

impl Participant {
    /// Create a new participant, alive with no votes.
    pub fn new(session_id: SessionId, player_number: i32, name: impl Into<String>) -> Self {
        Self {
            id: ParticipantId::new(),
            session_id,
            player_number,
            name: name.into(),
            status: ParticipantStatus::Alive,
            vote_count: 0,
        }
    }

    /// Reconstitute a participant from persistence.
    pub fn reconstitute(
        id: ParticipantId,
        session_id: SessionId,
        player_number: i32,
        name: String,
        status: ParticipantStatus,
        vote_count: u32,
    ) -> Self {
        Self {
            id,
            session_id,
            player_number,
            name,
            status,
            vote_count,
        }
    }

    pub fn id(&self) -> &ParticipantId {
        &self.id
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn player_number(&self) -> i32 {
        self.player_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> ParticipantStatus {
        self.status
    }

    pub fn vote_count(&self) -> u32 {
        self.vote_count
    }

    pub fn is_alive(&self) -> bool {
        self.status == ParticipantStatus::Alive
    }

    pub fn set_status(&mut self, status: ParticipantStatus) {
        self.status = status;
    }

    pub fn set_vote_count(&mut self, vote_count: u32) {
        self.vote_count = vote_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_participant_is_alive_without_votes() {
        let participant = Participant::new(SessionId::new(), 3, "Ada");
        assert!(participant.is_alive());
        assert_eq!(participant.vote_count(), 0);
        assert_eq!(participant.player_number(), 3);
        assert_eq!(participant.name(), "Ada");
    }

    #[test]
    fn setters_update_standing() {
        let mut participant = Participant::new(SessionId::new(), 1, "Bo");
        participant.set_vote_count(4);
        participant.set_status(ParticipantStatus::Eliminated);
        assert_eq!(participant.vote_count(), 4);
        assert!(!participant.is_alive());
    }
}

//! Session entity.
//!
//! A session is one voting round of the game. It optionally belongs to a
//! season; at most one session per season is the finale.

use crate::domain::foundation::{SeasonId, SessionId, SessionStatus};
use serde::{Deserialize, Serialize};

/// Contribution a session makes to its season's prize pot when none is recorded.
pub const DEFAULT_POT_CONTRIBUTION: i64 = 25;

/// A game session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    season_id: Option<SeasonId>,
    status: SessionStatus,
    is_finale: bool,
    pot_contribution: Option<i64>,
}

impl Session {
    /// Create a new session in the lobby.
    pub fn new(id: SessionId, season_id: Option<SeasonId>, is_finale: bool) -> Self {
        Self {
            id,
            season_id,
            status: SessionStatus::Lobby,
            is_finale,
            pot_contribution: None,
        }
    }

    /// Reconstitute a session from persistence.
    pub fn reconstitute(
        id: SessionId,
        season_id: Option<SeasonId>,
        status: SessionStatus,
        is_finale: bool,
        pot_contribution: Option<i64>,
    ) -> Self {
        Self {
            id,
            season_id,
            status,
            is_finale,
            pot_contribution,
        }
    }

    /// Sets an explicit prize pot contribution.
    pub fn with_pot_contribution(mut self, amount: i64) -> Self {
        self.pot_contribution = Some(amount);
        self
    }

    /// Sets the status (builder form, used when seeding stores).
    pub fn with_status(mut self, status: SessionStatus) -> Self {
        self.status = status;
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn season_id(&self) -> Option<&SeasonId> {
        self.season_id.as_ref()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_finale(&self) -> bool {
        self.is_finale
    }

    /// The recorded contribution, if any.
    pub fn pot_contribution(&self) -> Option<i64> {
        self.pot_contribution
    }

    /// The contribution counted towards the season pot.
    ///
    /// A missing or zero contribution counts as [`DEFAULT_POT_CONTRIBUTION`].
    pub fn effective_pot_contribution(&self) -> i64 {
        self.pot_contribution
            .filter(|&amount| amount != 0)
            .unwrap_or(DEFAULT_POT_CONTRIBUTION)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Move the session to a new status.
    pub fn set_status(&mut self, status: SessionStatus) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_in_lobby() {
        let session = Session::new(SessionId::new(), None, false);
        assert_eq!(session.status(), SessionStatus::Lobby);
        assert!(!session.is_finale());
        assert!(session.season_id().is_none());
    }

    #[test]
    fn missing_contribution_defaults_to_25() {
        let session = Session::new(SessionId::new(), Some(SeasonId::new()), false);
        assert_eq!(session.pot_contribution(), None);
        assert_eq!(session.effective_pot_contribution(), 25);
    }

    #[test]
    fn zero_contribution_counts_as_default() {
        let session = Session::new(SessionId::new(), None, false).with_pot_contribution(0);
        assert_eq!(session.pot_contribution(), Some(0));
        assert_eq!(session.effective_pot_contribution(), 25);
    }

    #[test]
    fn explicit_contribution_is_used() {

        let session = Session::new(SessionId::new(), None, false).with_pot_contribution(40);
        assert_eq!(session.effective_pot_contribution(), 40);
    }

    #[test]
    fn set_status_changes_status() {
        let mut session = Session::new(SessionId::new(), None, true);
        session.set_status(SessionStatus::Results);
        assert_eq!(session.status(), SessionStatus::Results);
    }
}

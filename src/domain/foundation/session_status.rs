//! SessionStatus enum for tracking the lifecycle of a game session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Lifecycle status of a game session.
///
/// Sessions move lobby → voting → results → completed, but any requested
/// status in this set is accepted; only entering `Results` carries side
/// effects (vote tally and eliminations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Lobby,
    Voting,
    Results,
    Completed,
}

impl SessionStatus {
    /// Every accepted status value, in lifecycle order.
    pub const ALL: [SessionStatus; 4] = [
        SessionStatus::Lobby,
        SessionStatus::Voting,
        SessionStatus::Results,
        SessionStatus::Completed,
    ];

    /// Wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Lobby => "lobby",
            SessionStatus::Voting => "voting",
            SessionStatus::Results => "results",
            SessionStatus::Completed => "completed",
        }
    }

    /// Returns true if entering this status resolves the session's votes.
    pub fn triggers_resolution(&self) -> bool {
        matches!(self, SessionStatus::Results)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SessionStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SessionStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("status", format!("unknown session status '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_lobby() {
        assert_eq!(SessionStatus::default(), SessionStatus::Lobby);
    }

    #[test]
    fn parses_every_known_status() {
        for status in SessionStatus::ALL {
            assert_eq!(status.as_str().parse::<SessionStatus>().unwrap(), status);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!("bogus".parse::<SessionStatus>().is_err());
        assert!("Results".parse::<SessionStatus>().is_err());
        assert!("".parse::<SessionStatus>().is_err());
    }

    #[test]
    fn only_results_triggers_resolution() {
        assert!(SessionStatus::Results.triggers_resolution());
        assert!(!SessionStatus::Lobby.triggers_resolution());
        assert!(!SessionStatus::Voting.triggers_resolution());
        assert!(!SessionStatus::Completed.triggers_resolution());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&SessionStatus::Results).unwrap(),
            "\"results\""
        );
        let status: SessionStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, SessionStatus::Completed);
    }
}

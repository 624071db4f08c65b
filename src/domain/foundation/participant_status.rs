//! ParticipantStatus enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether a participant is still in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantStatus {
    #[default]
    Alive,
    Eliminated,
}

impl ParticipantStatus {
    /// Wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticipantStatus::Alive => "alive",
            ParticipantStatus::Eliminated => "eliminated",
        }
    }
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParticipantStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "alive" => Ok(ParticipantStatus::Alive),
            "eliminated" => Ok(ParticipantStatus::Eliminated),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown participant status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_alive() {
        assert_eq!(ParticipantStatus::default(), ParticipantStatus::Alive);
    }

    #[test]
    fn parses_known_values() {
        assert_eq!("alive".parse::<ParticipantStatus>().unwrap(), ParticipantStatus::Alive);
        assert_eq!(
            "eliminated".parse::<ParticipantStatus>().unwrap(),
            ParticipantStatus::Eliminated
        );
        assert!("dead".parse::<ParticipantStatus>().is_err());
    }
}

//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Declares a UUID-backed identifier newtype.
///
/// Every entity id in the tracker shares the same shape, so the boilerplate
/// lives here once.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a season.
    SeasonId
);

uuid_id!(
    /// Unique identifier for a game session (one voting round).
    SessionId
);

uuid_id!(
    /// Unique identifier for a participant within a session.
    ParticipantId
);

uuid_id!(
    /// Unique identifier for a single cast vote.
    VoteId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        assert_ne!(SessionId::new(), SessionId::new());
        assert_ne!(ParticipantId::new(), ParticipantId::new());
    }

    #[test]
    fn parses_from_uuid_string() {
        let uuid = Uuid::new_v4();
        let id: SeasonId = uuid.to_string().parse().unwrap();
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn rejects_non_uuid_string() {
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn displays_as_hyphenated_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(VoteId::from_uuid(uuid).to_string(), uuid.to_string());
    }

    #[test]
    fn serializes_transparently() {
        let uuid = Uuid::new_v4();
        let json = serde_json::to_string(&ParticipantId::from_uuid(uuid)).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}

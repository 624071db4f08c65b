//! SeasonStatus enum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Lifecycle status of a season. A season closes once, when its finale resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeasonStatus {
    #[default]
    Open,
    Closed,
}

impl SeasonStatus {
    /// Wire/storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonStatus::Open => "open",
            SeasonStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for SeasonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeasonStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(SeasonStatus::Open),
            "closed" => Ok(SeasonStatus::Closed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown season status '{}'", other),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open() {
        assert_eq!(SeasonStatus::default(), SeasonStatus::Open);
    }

    #[test]
    fn conversion_roundtrips() {
        for status in [SeasonStatus::Open, SeasonStatus::Closed] {
            assert_eq!(status.as_str().parse::<SeasonStatus>().unwrap(), status);
        }
        assert!("archived".parse::<SeasonStatus>().is_err());
    }
}

//! Season aggregate.
//!
//! A season groups sessions and ends with a finale. Resolving the finale
//! closes the season, records the winner and fixes the prize pot.

use crate::domain::foundation::{SeasonId, SeasonStatus, Timestamp};
use serde::{Deserialize, Serialize};

/// Season aggregate.
///
/// # Invariants
///
/// - `winner_name` and `total_prize_pot` are only set by [`Season::close`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    id: SeasonId,
    name: String,
    status: SeasonStatus,
    winner_name: Option<String>,
    total_prize_pot: Option<i64>,
    created_at: Timestamp,
}

impl Season {
    /// Create a new open season.
    pub fn new(id: SeasonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            status: SeasonStatus::Open,
            winner_name: None,
            total_prize_pot: None,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute a season from persistence.
    pub fn reconstitute(
        id: SeasonId,
        name: String,
        status: SeasonStatus,
        winner_name: Option<String>,
        total_prize_pot: Option<i64>,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            status,
            winner_name,
            total_prize_pot,
            created_at,
        }
    }

    pub fn id(&self) -> &SeasonId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> SeasonStatus {
        self.status
    }

    pub fn winner_name(&self) -> Option<&str> {
        self.winner_name.as_deref()
    }

    pub fn total_prize_pot(&self) -> Option<i64> {
        self.total_prize_pot
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_closed(&self) -> bool {
        self.status == SeasonStatus::Closed
    }

    /// Close the season with its winner and final prize pot.
    ///
    /// Closing an already-closed season overwrites the previous result; the
    /// caller decides whether that is acceptable.
    pub fn close(&mut self, winner_name: impl Into<String>, total_prize_pot: i64) {
        self.status = SeasonStatus::Closed;
        self.winner_name = Some(winner_name.into());
        self.total_prize_pot = Some(total_prize_pot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_season_is_open_without_winner() {
        let season = Season::new(SeasonId::new(), "Season 1");
        assert_eq!(season.status(), SeasonStatus::Open);
        assert!(season.winner_name().is_none());
        assert!(season.total_prize_pot().is_none());
    }

    #[test]
    fn close_records_winner_and_pot() {
        let mut season = Season::new(SeasonId::new(), "Season 1");
        season.close("Ada", 75);
        assert!(season.is_closed());
        assert_eq!(season.winner_name(), Some("Ada"));
        assert_eq!(season.total_prize_pot(), Some(75));
    }
}

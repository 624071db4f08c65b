//! Selection of the resolution path for a session entering results.

use serde::{Deserialize, Serialize};

/// Number of participants eliminated at the end of a regular session.
pub const ELIMINATIONS_PER_ROUND: usize = 2;

/// How a session's results are decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    /// Finale with a single participant: declared winner without a tally.
    Walkover,
    /// Regular session too small to eliminate from: everyone survives.
    Reprieve,
    /// Finale decided by votes: top scorer wins, everyone else is eliminated.
    FinaleTally,
    /// Regular session decided by votes: the lowest scorers are eliminated.
    RoundTally,
}

impl ResolutionPath {
    /// Picks the path for a session with `participant_count` participants.
    ///
    /// # Edge Cases
    /// - Finale with zero participants tallies (and still closes the season)
    /// - Regular session with zero participants is a reprieve with nothing to write
    pub fn classify(is_finale: bool, participant_count: usize) -> Self {
        match (is_finale, participant_count) {
            (true, 1) => ResolutionPath::Walkover,
            (true, _) => ResolutionPath::FinaleTally,
            (false, n) if n <= ELIMINATIONS_PER_ROUND => ResolutionPath::Reprieve,
            (false, _) => ResolutionPath::RoundTally,
        }
    }
}

//! Prize pot calculation for a season.

use crate::domain::session::Session;

/// Season prize pot functions.
pub struct PrizePot;

impl PrizePot {
    /// Sums the pot contributions of a season's sessions.
    ///
    /// Finale sessions contribute nothing. Sessions without a recorded
    /// (or with a zero) contribution count as [`DEFAULT_POT_CONTRIBUTION`](crate::domain::session::DEFAULT_POT_CONTRIBUTION).
    pub fn total<'a>(sessions: impl IntoIterator<Item = &'a Session>) -> i64 {
        sessions
            .into_iter()
            .filter(|s| !s.is_finale())
            .map(Session::effective_pot_contribution)
            .sum()
    }
}

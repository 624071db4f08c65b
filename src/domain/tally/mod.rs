//! Tally Module - Pure domain services for resolving a session's votes.
//!
//! Stateless: takes participants and votes, returns counts and standings.
//! All persistence happens in the application layer.
//!
//! # Components
//!
//! - `ResolutionPath` - Walkover / Reprieve / FinaleTally / RoundTally selection
//! - `VoteTally` - Per-participant counts, finale and round standings

mod resolution_path;
mod vote_tally;

pub use resolution_path::{ResolutionPath, ELIMINATIONS_PER_ROUND};
pub use vote_tally::{FinaleStandings, RoundStandings, TallyEntry, VoteTally, UNKNOWN_WINNER};

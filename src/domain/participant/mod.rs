//! Participant domain module: the players of a session and the votes cast against them.

#[allow(clippy::module_inception)]
mod participant;
mod vote;

pub use participant::Participant;
pub use vote::Vote;

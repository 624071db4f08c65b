//! Elimination Tracker - Season-based elimination game backend
//!
//! Resolves game sessions when they enter the results phase: votes are
//! tallied, the lowest-voted participants are eliminated, and a finale
//! crowns the season winner and closes the season with its prize pot.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

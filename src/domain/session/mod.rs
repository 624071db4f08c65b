//! Session domain module.
//!
//! A session is a single voting round. Sessions are grouped into seasons and
//! the season's finale session decides its winner.

mod aggregate;
mod errors;

pub use aggregate::{Session, DEFAULT_POT_CONTRIBUTION};
pub use errors::SessionError;

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, status enums, errors)
//! - `season` - Season aggregate and prize pot calculation
//! - `session` - Game session entity and transition errors
//! - `participant` - Participants and the votes cast against them
//! - `tally` - Pure vote-resolution policy (eliminations, finale winner)

pub mod foundation;
pub mod participant;
pub mod season;
pub mod session;
pub mod tally;

//! Season domain module.

mod aggregate;
mod prize_pot;

pub use aggregate::Season;
pub use prize_pot::PrizePot;

//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod session;

pub use session::{
    TransitionSessionStatusCommand, TransitionSessionStatusHandler, TransitionSessionStatusResult,
};

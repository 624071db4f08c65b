//! Session command handlers.

mod transition_session_status;

pub use transition_session_status::{
    TransitionSessionStatusCommand, TransitionSessionStatusHandler, TransitionSessionStatusResult,
};

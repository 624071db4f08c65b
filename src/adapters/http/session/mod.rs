//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ErrorResponse, SessionResponse, UpdateSessionStatusRequest};
pub use handlers::SessionHandlers;
pub use routes::session_routes;

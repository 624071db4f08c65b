//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `postgres` - PostgreSQL repositories (sqlx)
//! - `memory` - In-memory store for tests and local runs
//! - `http` - axum endpoints

pub mod http;
pub mod memory;
pub mod postgres;

pub use memory::{InMemoryStore, StoreOperation};
pub use postgres::{
    PostgresParticipantRepository, PostgresSeasonRepository, PostgresSessionRepository,
    PostgresVoteReader,
};

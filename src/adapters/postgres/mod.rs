//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresSessionRepository` - Session reads and status writes
//! - `PostgresParticipantRepository` - Participant standings
//! - `PostgresVoteReader` - Votes cast in a session
//! - `PostgresSeasonRepository` - Season reads and closure

mod participant_repository;
mod season_repository;
mod session_repository;
mod vote_reader;

pub use participant_repository::PostgresParticipantRepository;
pub use season_repository::PostgresSeasonRepository;
pub use session_repository::PostgresSessionRepository;
pub use vote_reader::PostgresVoteReader;

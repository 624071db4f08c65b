//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! The store behind these ports is a plain keyed CRUD store: every read
//! filters by equality or membership, and no call spans more than one table.
//!
//! - `SessionRepository` - Session reads and status writes
//! - `ParticipantRepository` - Participant reads, vote counts and statuses
//! - `VoteReader` - Votes cast within a session
//! - `SeasonRepository` - Season reads and closure

mod participant_repository;
mod season_repository;
mod session_repository;
mod vote_reader;

pub use participant_repository::ParticipantRepository;
pub use season_repository::SeasonRepository;
pub use session_repository::SessionRepository;
pub use vote_reader::VoteReader;

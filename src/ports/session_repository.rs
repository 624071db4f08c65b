//! Session repository port.
//!
//! Defines the contract for reading sessions and writing their status.
//! Implementations handle the actual database operations.
//!
//! # Design
//!
//! - **Status-only writes**: the resolver never rewrites other session columns
//! - **Per-row atomicity**: each call is atomic on its own; there is no
//!   transaction spanning several calls

use crate::domain::foundation::{DomainError, SeasonId, SessionId, SessionStatus};
use crate::domain::session::Session;
use async_trait::async_trait;

/// Repository port for game sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Find every session belonging to a season, the finale included.
    async fn find_by_season(&self, season_id: &SeasonId) -> Result<Vec<Session>, DomainError>;

    /// Set one session's status and return the updated record.
    ///
    /// Returns `None` if the session does not exist.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn update_status(
        &self,
        id: &SessionId,
        status: SessionStatus,
    ) -> Result<Option<Session>, DomainError>;

    /// Set the status of every listed session. Unknown ids are skipped.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn update_status_many(
        &self,
        ids: &[SessionId],
        status: SessionStatus,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SessionRepository) {}
    }
}

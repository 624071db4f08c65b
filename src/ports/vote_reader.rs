//! Vote reader port (read side).
//!
//! Votes are immutable once cast, so the resolver only ever reads them.

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::participant::Vote;
use async_trait::async_trait;

/// Reader port for votes.
#[async_trait]
pub trait VoteReader: Send + Sync {
    /// Every vote cast within a session.
    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Vote>, DomainError>;
}

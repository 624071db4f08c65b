//! Season repository port.

use crate::domain::foundation::{DomainError, SeasonId};
use crate::domain::season::Season;
use async_trait::async_trait;

/// Repository port for Season aggregate persistence.
#[async_trait]
pub trait SeasonRepository: Send + Sync {
    /// Find a season by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &SeasonId) -> Result<Option<Season>, DomainError>;

    /// Persist a season's status, winner and prize pot.
    ///
    /// # Errors
    ///
    /// - `SeasonNotFound` if the season doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, season: &Season) -> Result<(), DomainError>;
}

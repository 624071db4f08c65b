//! PostgreSQL implementation of VoteReader.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, ParticipantId, SessionId, VoteId};
use crate::domain::participant::Vote;
use crate::ports::VoteReader;

/// PostgreSQL implementation of VoteReader.
#[derive(Clone)]
pub struct PostgresVoteReader {
    pool: PgPool,
}

impl PostgresVoteReader {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoteReader for PostgresVoteReader {
    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Vote>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, session_id, participant_id FROM votes WHERE session_id = $1 ORDER BY id",
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch votes: {}", e),
            )
        })?;

        rows.into_iter()
            .map(|row| {
                let get = |column: &str| -> Result<uuid::Uuid, DomainError> {
                    row.try_get(column).map_err(|e| {
                        DomainError::new(
                            ErrorCode::DatabaseError,
                            format!("Failed to get {}: {}", column, e),
                        )
                    })
                };
                Ok(Vote::reconstitute(
                    VoteId::from_uuid(get("id")?),
                    SessionId::from_uuid(get("session_id")?),
                    ParticipantId::from_uuid(get("participant_id")?),
                ))
            })
            .collect()
    }
}

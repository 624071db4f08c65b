//! PostgreSQL implementation of ParticipantRepository.
//!
//! Vote counts are stored as `INTEGER`; conversions to and from `u32`
//! are checked.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    DomainError, ErrorCode, ParticipantId, ParticipantStatus, SessionId,
};
use crate::domain::participant::Participant;
use crate::ports::ParticipantRepository;

/// PostgreSQL implementation of ParticipantRepository.
#[derive(Clone)]
pub struct PostgresParticipantRepository {
    pool: PgPool,
}

impl PostgresParticipantRepository {
    /// Creates a new PostgresParticipantRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParticipantRepository for PostgresParticipantRepository {
    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Participant>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, session_id, player_number, name, status, vote_count
            FROM participants
            WHERE session_id = $1
            ORDER BY player_number, id
            "#,
        )
        .bind(session_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch participants: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_participant).collect()
    }

    async fn record_vote_count(
        &self,
        id: &ParticipantId,
        vote_count: u32,
    ) -> Result<(), DomainError> {
        let vote_count = i32::try_from(vote_count).map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Vote count out of range: {}", vote_count),
            )
        })?;

        let result = sqlx::query("UPDATE participants SET vote_count = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(vote_count)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to update vote count: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::ParticipantNotFound,
                format!("Participant not found: {}", id),
            ));
        }

        Ok(())
    }

    async fn set_status(
        &self,
        ids: &[ParticipantId],
        status: ParticipantStatus,
    ) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }

        sqlx::query("UPDATE participants SET status = $2 WHERE id = ANY($1)")
            .bind(to_uuids(ids))
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to update participant statuses: {}", e),
                )
            })?;

        Ok(())
    }

    async fn reset_standing(&self, ids: &[ParticipantId]) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }

        sqlx::query("UPDATE participants SET status = $2, vote_count = 0 WHERE id = ANY($1)")
            .bind(to_uuids(ids))
            .bind(ParticipantStatus::Alive.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to reset participant standing: {}", e),
                )
            })?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn to_uuids(ids: &[ParticipantId]) -> Vec<uuid::Uuid> {
    ids.iter().map(|id| *id.as_uuid()).collect()
}

fn str_to_participant_status(s: &str) -> Result<ParticipantStatus, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid participant status: {}", s),
        )
    })
}

fn row_to_participant(row: sqlx::postgres::PgRow) -> Result<Participant, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get id: {}", e),
        )
    })?;

    let session_id: uuid::Uuid = row.try_get("session_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get session_id: {}", e),
        )
    })?;

    let player_number: i32 = row.try_get("player_number").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get player_number: {}", e),
        )
    })?;

    let name: String = row.try_get("name").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get name: {}", e),
        )
    })?;

    let status_str: String = row.try_get("status").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get status: {}", e),
        )
    })?;
    let status = str_to_participant_status(&status_str)?;

    let vote_count: i32 = row.try_get("vote_count").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get vote_count: {}", e),
        )
    })?;
    let vote_count = u32::try_from(vote_count).map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Negative vote_count: {}", vote_count),
        )
    })?;

    Ok(Participant::reconstitute(
        ParticipantId::from_uuid(id),
        SessionId::from_uuid(session_id),
        player_number,
        name,
        status,
        vote_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_status_conversion_roundtrips() {
        for status in [ParticipantStatus::Alive, ParticipantStatus::Eliminated] {
            assert_eq!(
                str_to_participant_status(status.as_str()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn str_to_participant_status_rejects_invalid() {
        assert!(str_to_participant_status("zombie").is_err());
    }

    #[test]
    fn to_uuids_preserves_order() {
        let ids = [ParticipantId::new(), ParticipantId::new()];
        let uuids = to_uuids(&ids);
        assert_eq!(uuids, vec![*ids[0].as_uuid(), *ids[1].as_uuid()]);
    }
}

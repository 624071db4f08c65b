//! PostgreSQL implementation of SessionRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, SeasonId, SessionId, SessionStatus};
use crate::domain::session::Session;
use crate::ports::SessionRepository;

const SESSION_COLUMNS: &str = "id, season_id, status, is_finale, pot_contribution";

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    /// Creates a new PostgresSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE id = $1",
            SESSION_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch session: {}", e),
            )
        })?;

        row.map(row_to_session).transpose()
    }

    async fn find_by_season(&self, season_id: &SeasonId) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM sessions WHERE season_id = $1 ORDER BY created_at, id",
            SESSION_COLUMNS
        ))
        .bind(season_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch sessions by season: {}", e),
            )
        })?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn update_status(
        &self,
        id: &SessionId,
        status: SessionStatus,
    ) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(&format!(
            "UPDATE sessions SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING {}",
            SESSION_COLUMNS
        ))
        .bind(id.as_uuid())
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update session status: {}", e),
            )
        })?;

        row.map(row_to_session).transpose()
    }

    async fn update_status_many(
        &self,
        ids: &[SessionId],
        status: SessionStatus,
    ) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }

        let uuids: Vec<uuid::Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        sqlx::query("UPDATE sessions SET status = $2, updated_at = NOW() WHERE id = ANY($1)")
            .bind(uuids)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to update session statuses: {}", e),
                )
            })?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn str_to_session_status(s: &str) -> Result<SessionStatus, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid session status: {}", s),
        )
    })
}

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<Session, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get id: {}", e),
        )
    })?;

    let season_id: Option<uuid::Uuid> = row.try_get("season_id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get season_id: {}", e),
        )
    })?;

    let status_str: String = row.try_get("status").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get status: {}", e),
        )
    })?;
    let status = str_to_session_status(&status_str)?;

    let is_finale: bool = row.try_get("is_finale").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get is_finale: {}", e),
        )
    })?;

    let pot_contribution: Option<i64> = row.try_get("pot_contribution").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get pot_contribution: {}", e),
        )
    })?;

    Ok(Session::reconstitute(
        SessionId::from_uuid(id),
        season_id.map(SeasonId::from_uuid),
        status,
        is_finale,
        pot_contribution,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_status_conversion_roundtrips() {
        for status in SessionStatus::ALL {
            assert_eq!(str_to_session_status(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn str_to_session_status_rejects_invalid() {
        let err = str_to_session_status("archived").unwrap_err();
        assert_eq!(err.code, ErrorCode::DatabaseError);
    }
}

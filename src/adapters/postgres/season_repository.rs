//! PostgreSQL implementation of SeasonRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{DomainError, ErrorCode, SeasonId, SeasonStatus, Timestamp};
use crate::domain::season::Season;
use crate::ports::SeasonRepository;

/// PostgreSQL implementation of SeasonRepository.
#[derive(Clone)]
pub struct PostgresSeasonRepository {
    pool: PgPool,
}

impl PostgresSeasonRepository {
    /// Creates a new PostgresSeasonRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SeasonRepository for PostgresSeasonRepository {
    async fn find_by_id(&self, id: &SeasonId) -> Result<Option<Season>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, status, winner_name, total_prize_pot, created_at
            FROM seasons
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch season: {}", e),
            )
        })?;

        row.map(row_to_season).transpose()
    }

    async fn update(&self, season: &Season) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE seasons SET
                status = $2,
                winner_name = $3,
                total_prize_pot = $4
            WHERE id = $1
            "#,
        )
        .bind(season.id().as_uuid())
        .bind(season.status().as_str())
        .bind(season.winner_name())
        .bind(season.total_prize_pot())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update season: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::SeasonNotFound,
                format!("Season not found: {}", season.id()),
            ));
        }

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn str_to_season_status(s: &str) -> Result<SeasonStatus, DomainError> {
    s.parse().map_err(|_| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid season status: {}", s),
        )
    })
}

fn row_to_season(row: sqlx::postgres::PgRow) -> Result<Season, DomainError> {
    let id: uuid::Uuid = row.try_get("id").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get id: {}", e),
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
    let status = str_to_season_status(&status_str)?;

    let winner_name: Option<String> = row.try_get("winner_name").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get winner_name: {}", e),
        )
    })?;

    let total_prize_pot: Option<i64> = row.try_get("total_prize_pot").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get total_prize_pot: {}", e),
        )
    })?;

    let created_at: chrono::DateTime<chrono::Utc> = row.try_get("created_at").map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to get created_at: {}", e),
        )
    })?;

    Ok(Season::reconstitute(
        SeasonId::from_uuid(id),
        name,
        status,
        winner_name,
        total_prize_pot,
        Timestamp::from_datetime(created_at),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn season_status_conversion_roundtrips() {
        for status in [SeasonStatus::Open, SeasonStatus::Closed] {
            assert_eq!(str_to_season_status(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn str_to_season_status_rejects_invalid() {
        assert!(str_to_season_status("paused").is_err());
    }
}

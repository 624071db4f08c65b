//! In-memory store implementing every persistence port.
//!
//! Rows are kept in insertion order, which is the listing order returned
//! by `find_by_session` and friends.
//!
//! Individual operations can be made to fail with [`InMemoryStore::fail_on`],
//! so tests can observe what a partially applied resolution leaves behind.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    DomainError, ErrorCode, ParticipantId, ParticipantStatus, SeasonId, SessionId, SessionStatus,
};
use crate::domain::participant::{Participant, Vote};
use crate::domain::season::Season;
use crate::domain::session::Session;
use crate::ports::{ParticipantRepository, SeasonRepository, SessionRepository, VoteReader};

/// Store operations that can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    FindSession,
    FindSeasonSessions,
    UpdateSessionStatus,
    UpdateSessionStatusMany,
    FindParticipants,
    RecordVoteCount,
    SetParticipantStatus,
    ResetStanding,
    FindVotes,
    FindSeason,
    UpdateSeason,
}

/// Copy of every row in the store, for before/after comparisons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub seasons: Vec<Season>,
    pub sessions: Vec<Session>,
    pub participants: Vec<Participant>,
    pub votes: Vec<Vote>,
}

/// In-memory implementation of the session, participant, vote and season ports.
#[derive(Default)]
pub struct InMemoryStore {
    state: RwLock<StoreSnapshot>,
    failures: RwLock<HashSet<StoreOperation>>,
    writes: AtomicUsize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // === Seeding ===

    pub async fn insert_season(&self, season: Season) {
        self.state.write().await.seasons.push(season);
    }

    pub async fn insert_session(&self, session: Session) {
        self.state.write().await.sessions.push(session);
    }

    pub async fn insert_participant(&self, participant: Participant) {
        self.state.write().await.participants.push(participant);
    }

    pub async fn insert_vote(&self, vote: Vote) {
        self.state.write().await.votes.push(vote);
    }

    /// Overwrites a participant's standing without counting as a write.
    pub async fn set_participant(
        &self,
        id: &ParticipantId,
        status: ParticipantStatus,
        vote_count: u32,
    ) {
        let mut state = self.state.write().await;
        if let Some(p) = state.participants.iter_mut().find(|p| p.id() == id) {
            p.set_status(status);
            p.set_vote_count(vote_count);
        }
    }

    /// Makes every later call of `operation` fail with a database error.
    pub async fn fail_on(&self, operation: StoreOperation) {
        self.failures.write().await.insert(operation);
    }

    // === Inspection ===

    pub async fn session(&self, id: &SessionId) -> Option<Session> {
        let state = self.state.read().await;
        state.sessions.iter().find(|s| s.id() == id).cloned()
    }

    pub async fn season(&self, id: &SeasonId) -> Option<Season> {
        let state = self.state.read().await;
        state.seasons.iter().find(|s| s.id() == id).cloned()
    }

    pub async fn participant(&self, id: &ParticipantId) -> Option<Participant> {
        let state = self.state.read().await;
        state.participants.iter().find(|p| p.id() == id).cloned()
    }

    pub async fn participants_of(&self, session_id: &SessionId) -> Vec<Participant> {
        let state = self.state.read().await;
        state
            .participants
            .iter()
            .filter(|p| p.session_id() == session_id)
            .cloned()
            .collect()
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        self.state.read().await.clone()
    }

    /// Number of successful write calls since creation.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    async fn check(&self, operation: StoreOperation) -> Result<(), DomainError> {
        if self.failures.read().await.contains(&operation) {
            return Err(DomainError::database(format!(
                "injected failure on {:?}",
                operation
            )));
        }
        Ok(())
    }

    fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        self.check(StoreOperation::FindSession).await?;
        Ok(self.session(id).await)
    }

    async fn find_by_season(&self, season_id: &SeasonId) -> Result<Vec<Session>, DomainError> {
        self.check(StoreOperation::FindSeasonSessions).await?;
        let state = self.state.read().await;
        Ok(state
            .sessions
            .iter()
            .filter(|s| s.season_id() == Some(season_id))
            .cloned()
            .collect())
    }

    async fn update_status(
        &self,
        id: &SessionId,
        status: SessionStatus,
    ) -> Result<Option<Session>, DomainError> {
        self.check(StoreOperation::UpdateSessionStatus).await?;
        let mut state = self.state.write().await;
        let updated = state.sessions.iter_mut().find(|s| s.id() == id).map(|s| {
            s.set_status(status);
            s.clone()
        });
        self.record_write();
        Ok(updated)
    }

    async fn update_status_many(
        &self,
        ids: &[SessionId],
        status: SessionStatus,
    ) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }
        self.check(StoreOperation::UpdateSessionStatusMany).await?;
        let mut state = self.state.write().await;
        for session in state.sessions.iter_mut().filter(|s| ids.contains(s.id())) {
            session.set_status(status);
        }
        self.record_write();
        Ok(())
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryStore {
    async fn find_by_session(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<Participant>, DomainError> {
        self.check(StoreOperation::FindParticipants).await?;
        Ok(self.participants_of(session_id).await)
    }

    async fn record_vote_count(
        &self,
        id: &ParticipantId,
        vote_count: u32,
    ) -> Result<(), DomainError> {
        self.check(StoreOperation::RecordVoteCount).await?;
        let mut state = self.state.write().await;
        let participant = state
            .participants
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::ParticipantNotFound,
                    format!("Participant not found: {}", id),
                )
            })?;
        participant.set_vote_count(vote_count);
        self.record_write();
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
        self.check(StoreOperation::SetParticipantStatus).await?;
        let mut state = self.state.write().await;
        for p in state.participants.iter_mut().filter(|p| ids.contains(p.id())) {
            p.set_status(status);
        }
        self.record_write();
        Ok(())
    }

    async fn reset_standing(&self, ids: &[ParticipantId]) -> Result<(), DomainError> {
        if ids.is_empty() {
            return Ok(());
        }
        self.check(StoreOperation::ResetStanding).await?;
        let mut state = self.state.write().await;
        for p in state.participants.iter_mut().filter(|p| ids.contains(p.id())) {
            p.set_status(ParticipantStatus::Alive);
            p.set_vote_count(0);
        }
        self.record_write();
        Ok(())
    }
}

#[async_trait]
impl VoteReader for InMemoryStore {
    async fn find_by_session(&self, session_id: &SessionId) -> Result<Vec<Vote>, DomainError> {
        self.check(StoreOperation::FindVotes).await?;
        let state = self.state.read().await;
        Ok(state
            .votes
            .iter()
            .filter(|v| v.session_id() == session_id)
            .copied()
            .collect())
    }
}

#[async_trait]
impl SeasonRepository for InMemoryStore {
    async fn find_by_id(&self, id: &SeasonId) -> Result<Option<Season>, DomainError> {
        self.check(StoreOperation::FindSeason).await?;
        Ok(self.season(id).await)
    }

    async fn update(&self, season: &Season) -> Result<(), DomainError> {
        self.check(StoreOperation::UpdateSeason).await?;
        let mut state = self.state.write().await;
        let slot = state
            .seasons
            .iter_mut()
            .find(|s| s.id() == season.id())
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SeasonNotFound,
                    format!("Season not found: {}", season.id()),
                )
            })?;
        *slot = season.clone();
        self.record_write();
        Ok(())
    }
}

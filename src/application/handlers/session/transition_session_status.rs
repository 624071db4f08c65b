//! TransitionSessionStatusHandler - Command handler for session status changes.
//!
//! Entering `results` resolves the session first: votes are tallied,
//! participants are eliminated or kept alive, and a finale closes its season.
//!
//! The procedure is a sequence of independent store writes. A failing write
//! aborts the procedure, but writes that already succeeded are not undone.

use std::sync::Arc;

use crate::domain::foundation::{ParticipantId, ParticipantStatus, SessionId, SessionStatus};
use crate::domain::participant::Participant;
use crate::domain::season::PrizePot;
use crate::domain::session::{Session, SessionError};
use crate::domain::tally::{ResolutionPath, VoteTally};
use crate::ports::{ParticipantRepository, SeasonRepository, SessionRepository, VoteReader};

/// Command to move a session to a new status.
///
/// `status` is the raw requested value; it is validated before anything is read.
#[derive(Debug, Clone)]
pub struct TransitionSessionStatusCommand {
    pub session_id: SessionId,
    pub status: String,
}

/// Result of a successful transition.
#[derive(Debug, Clone)]
pub struct TransitionSessionStatusResult {
    /// The session as stored after the status write.
    pub session: Session,
    /// How the session was resolved, when the transition entered `results`.
    pub resolution: Option<ResolutionPath>,
}

/// Handler for session status transitions.
pub struct TransitionSessionStatusHandler {
    sessions: Arc<dyn SessionRepository>,
    participants: Arc<dyn ParticipantRepository>,
    votes: Arc<dyn VoteReader>,
    seasons: Arc<dyn SeasonRepository>,
}

impl TransitionSessionStatusHandler {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        participants: Arc<dyn ParticipantRepository>,
        votes: Arc<dyn VoteReader>,
        seasons: Arc<dyn SeasonRepository>,
    ) -> Self {
        Self {
            sessions,
            participants,
            votes,
            seasons,
        }
    }

    pub async fn handle(
        &self,
        cmd: TransitionSessionStatusCommand,
    ) -> Result<TransitionSessionStatusResult, SessionError> {
        // 1. Validate
        let status: SessionStatus = cmd.status.parse()?;

        // 2. Load session
        let session = self
            .sessions
            .find_by_id(&cmd.session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        // 3. Resolve
        let resolution = if status.triggers_resolution() {
            Some(self.resolve(&session).await?)
        } else {
            None
        };

        // 4. Persist status
        let session = self
            .sessions
            .update_status(&cmd.session_id, status)
            .await?
            .ok_or_else(|| SessionError::not_found(cmd.session_id))?;

        tracing::info!(
            session_id = %cmd.session_id,
            status = %status,
            resolution = ?resolution,
            "Session status updated"
        );

        Ok(TransitionSessionStatusResult {
            session,
            resolution,
        })
    }

    async fn resolve(&self, session: &Session) -> Result<ResolutionPath, SessionError> {
        let participants = self.participants.find_by_session(session.id()).await?;
        let path = ResolutionPath::classify(session.is_finale(), participants.len());

        tracing::debug!(
            session_id = %session.id(),
            participants = participants.len(),
            is_finale = session.is_finale(),
            path = ?path,
            "Resolving session"
        );

        match path {
            ResolutionPath::Walkover => {
                debug_assert_eq!(participants.len(), 1);
                if let Some(winner) = participants.first() {
                    self.walkover(session, winner).await?;
                }
            }
            ResolutionPath::Reprieve => {
                let ids: Vec<ParticipantId> = participants.iter().map(|p| *p.id()).collect();
                if !ids.is_empty() {
                    self.participants.reset_standing(&ids).await?;
                }
            }
            ResolutionPath::FinaleTally => {
                let tally = self.tally(session, &participants).await?;
                let standings = tally.finale_standings();

                if let Some(winner) = &standings.winner {
                    self.participants
                        .set_status(&[winner.participant_id], ParticipantStatus::Alive)
                        .await?;
                }
                self.set_status_if_any(&standings.eliminated, ParticipantStatus::Eliminated)
                    .await?;

                self.close_season(session, standings.winner_name()).await?;
            }
            ResolutionPath::RoundTally => {
                let tally = self.tally(session, &participants).await?;
                let standings = tally.round_standings();

                self.set_status_if_any(&standings.eliminated, ParticipantStatus::Eliminated)
                    .await?;
                self.set_status_if_any(&standings.survivors, ParticipantStatus::Alive)
                    .await?;

                tracing::info!(
                    session_id = %session.id(),
                    eliminated = standings.eliminated.len(),
                    survivors = standings.survivors.len(),
                    "Round resolved"
                );
            }
        }

        Ok(path)
    }

    /// Sole finalist wins without a tally.
    async fn walkover(&self, session: &Session, winner: &Participant) -> Result<(), SessionError> {
        self.participants.reset_standing(&[*winner.id()]).await?;
        self.close_season(session, winner.name()).await
    }

    /// Reads the votes and records every participant's count.
    async fn tally(
        &self,
        session: &Session,
        participants: &[Participant],
    ) -> Result<VoteTally, SessionError> {
        let votes = self.votes.find_by_session(session.id()).await?;
        let tally = VoteTally::count(participants, &votes);

        if tally.ignored_votes() > 0 {
            tracing::warn!(
                session_id = %session.id(),
                ignored = tally.ignored_votes(),
                "Votes target non-participants and were not counted"
            );
        }

        for entry in tally.entries() {
            self.participants
                .record_vote_count(&entry.participant_id, entry.votes)
                .await?;
        }

        Ok(tally)
    }

    /// Closes the finale's season and marks its other sessions completed.
    async fn close_season(&self, finale: &Session, winner_name: &str) -> Result<(), SessionError> {
        let Some(season_id) = finale.season_id() else {
            tracing::debug!(session_id = %finale.id(), "Finale has no season to close");
            return Ok(());
        };

        let season_sessions = self.sessions.find_by_season(season_id).await?;
        let total_prize_pot = PrizePot::total(&season_sessions);

        match self.seasons.find_by_id(season_id).await? {
            Some(mut season) => {
                if season.is_closed() {
                    tracing::warn!(
                        season_id = %season_id,
                        previous_winner = ?season.winner_name(),
                        "Season already closed, overwriting result"
                    );
                }
                season.close(winner_name, total_prize_pot);
                self.seasons.update(&season).await?;

                tracing::info!(
                    season_id = %season_id,
                    winner = winner_name,
                    total_prize_pot,
                    "Season closed"
                );
            }
            None => {
                tracing::warn!(
                    season_id = %season_id,
                    session_id = %finale.id(),
                    "Finale references a missing season, skipping closure"
                );
            }
        }

        let others: Vec<SessionId> = season_sessions
            .iter()
            .map(|s| *s.id())
            .filter(|id| id != finale.id())
            .collect();
        if !others.is_empty() {
            self.sessions
                .update_status_many(&others, SessionStatus::Completed)
                .await?;
        }

        Ok(())
    }

    async fn set_status_if_any(
        &self,
        ids: &[ParticipantId],
        status: ParticipantStatus,
    ) -> Result<(), SessionError> {
        if ids.is_empty() {
            return Ok(());
        }
        self.participants.set_status(ids, status).await?;
        Ok(())
    }
}

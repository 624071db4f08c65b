//! Vote tally - per-participant vote counts and the standings derived from them.
//!
//! Ties are broken by participant order: whenever two participants have the
//! same count, the one listed first keeps its place. Both sorts below are
//! stable sorts, which is what guarantees this.

use std::collections::HashMap;

use crate::domain::foundation::ParticipantId;
use crate::domain::participant::{Participant, Vote};

use super::ELIMINATIONS_PER_ROUND;

/// Winner name recorded when a finale resolves with nobody in it.
pub const UNKNOWN_WINNER: &str = "Unknown";

/// One participant's tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    pub participant_id: ParticipantId,
    pub name: String,
    pub votes: u32,
}

/// Outcome of a finale tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinaleStandings {
    /// Top scorer; `None` only when the finale had no participants.
    pub winner: Option<TallyEntry>,
    /// Everyone else, highest count first.
    pub eliminated: Vec<ParticipantId>,
}

impl FinaleStandings {
    /// Name recorded on the season.
    pub fn winner_name(&self) -> &str {
        self.winner
            .as_ref()
            .map(|w| w.name.as_str())
            .unwrap_or(UNKNOWN_WINNER)
    }
}

/// Outcome of a regular session tally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundStandings {
    /// Lowest scorers, lowest first.
    pub eliminated: Vec<ParticipantId>,
    /// Everyone else, lowest first.
    pub survivors: Vec<ParticipantId>,
}

/// Per-participant vote counts for one session, in participant order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally {
    entries: Vec<TallyEntry>,
    ignored_votes: usize,
}

impl VoteTally {
    /// Counts the votes cast against each participant.
    ///
    /// # Edge Cases
    /// - Participants without votes count 0
    /// - Votes targeting someone who is not a participant are ignored
    /// - No participants: empty tally
    pub fn count(participants: &[Participant], votes: &[Vote]) -> Self {
        let mut counts: HashMap<ParticipantId, u32> =
            participants.iter().map(|p| (*p.id(), 0)).collect();
        let mut ignored_votes = 0;

        for vote in votes {
            match counts.get_mut(vote.participant_id()) {
                Some(count) => *count += 1,
                None => ignored_votes += 1,
            }
        }

        let entries = participants
            .iter()
            .map(|p| TallyEntry {
                participant_id: *p.id(),
                name: p.name().to_string(),
                votes: counts.get(p.id()).copied().unwrap_or(0),
            })
            .collect();

        Self {
            entries,
            ignored_votes,
        }
    }

    /// Entries in participant order.
    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// Votes for one participant (0 if unknown).
    pub fn votes_for(&self, participant_id: &ParticipantId) -> u32 {
        self.entries
            .iter()
            .find(|e| &e.participant_id == participant_id)
            .map(|e| e.votes)
            .unwrap_or(0)
    }

    /// Sum of all counted votes.
    pub fn total_votes(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.votes)).sum()
    }

    /// Votes that matched no participant.
    pub fn ignored_votes(&self) -> usize {
        self.ignored_votes
    }

    /// Finale: the single top scorer wins, everyone else is eliminated.
    pub fn finale_standings(&self) -> FinaleStandings {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.votes.cmp(&a.votes));

        let mut ranked = ranked.into_iter();
        let winner = ranked.next();
        let eliminated = ranked.map(|e| e.participant_id).collect();

        FinaleStandings { winner, eliminated }
    }

    /// Regular session: the bottom [`ELIMINATIONS_PER_ROUND`] are eliminated.
    pub fn round_standings(&self) -> RoundStandings {
        let mut ranked: Vec<ParticipantId> = {
            let mut entries: Vec<&TallyEntry> = self.entries.iter().collect();
            entries.sort_by_key(|e| e.votes);
            entries.into_iter().map(|e| e.participant_id).collect()
        };

        let cut = ELIMINATIONS_PER_ROUND.min(ranked.len());
        let survivors = ranked.split_off(cut);

        RoundStandings {
            eliminated: ranked,
            survivors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SessionId;
    use proptest::prelude::*;

    fn players(session_id: SessionId, names: &[&str]) -> Vec<Participant> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Participant::new(session_id, i as i32 + 1, *name))
            .collect()
    }

    fn votes_against(session_id: SessionId, target: &Participant, n: usize) -> Vec<Vote> {
        (0..n).map(|_| Vote::new(session_id, *target.id())).collect()
    }

    fn cast(session_id: SessionId, participants: &[Participant], counts: &[usize]) -> Vec<Vote> {
        participants
            .iter()
            .zip(counts)
            .flat_map(|(p, n)| votes_against(session_id, p, *n))
            .collect()
    }

    #[test]
    fn counts_votes_per_participant() {
        let session_id = SessionId::new();
        let ps = players(session_id, &["A", "B", "C"]);
        let votes = cast(session_id, &ps, &[2, 0, 5]);

        let tally = VoteTally::count(&ps, &votes);

        assert_eq!(tally.votes_for(ps[0].id()), 2);
        assert_eq!(tally.votes_for(ps[1].id()), 0);
        assert_eq!(tally.votes_for(ps[2].id()), 5);
        assert_eq!(tally.total_votes(), 7);
    }

    #[test]
    fn ignores_votes_for_strangers() {
        let session_id = SessionId::new();
        let ps = players(session_id, &["A", "B", "C"]);
        let mut votes = cast(session_id, &ps, &[1, 1, 1]);
        votes.push(Vote::new(session_id, ParticipantId::new()));

        let tally = VoteTally::count(&ps, &votes);

        assert_eq!(tally.total_votes(), 3);
        assert_eq!(tally.ignored_votes(), 1);
    }

    #[test]
    fn empty_tally_has_no_entries() {
        let tally = VoteTally::count(&[], &[]);
        assert!(tally.entries().is_empty());
        assert_eq!(tally.total_votes(), 0);
    }

    #[test]
    fn round_eliminates_two_lowest() {
        // A:1, B:3, C:0, D:2 -> ascending C, A, D, B
        let session_id = SessionId::new();
        let ps = players(session_id, &["A", "B", "C", "D"]);
        let votes = cast(session_id, &ps, &[1, 3, 0, 2]);

        let standings = VoteTally::count(&ps, &votes).round_standings();

        assert_eq!(standings.eliminated, vec![*ps[2].id(), *ps[0].id()]);
        assert_eq!(standings.survivors, vec![*ps[3].id(), *ps[1].id()]);
    }

    #[test]
    fn round_ties_keep_participant_order() {
        let session_id = SessionId::new();
        let ps = players(session_id, &["A", "B", "C", "D"]);
        let votes = cast(session_id, &ps, &[1, 1, 1, 0]);

        let standings = VoteTally::count(&ps, &votes).round_standings();

        assert_eq!(standings.eliminated, vec![*ps[3].id(), *ps[0].id()]);
        assert_eq!(standings.survivors, vec![*ps[1].id(), *ps[2].id()]);
    }

    #[test]
    fn finale_top_scorer_wins() {
        let session_id = SessionId::new();
        let ps = players(session_id, &["A", "B", "C"]);
        let votes = cast(session_id, &ps, &[1, 4, 2]);

        let standings = VoteTally::count(&ps, &votes).finale_standings();

        let winner = standings.winner.as_ref().unwrap();
        assert_eq!(winner.participant_id, *ps[1].id());
        assert_eq!(winner.votes, 4);
        assert_eq!(standings.winner_name(), "B");
        assert_eq!(standings.eliminated, vec![*ps[2].id(), *ps[0].id()]);
    }

    #[test]
    fn finale_tie_goes_to_first_listed() {
        let session_id = SessionId::new();
        let ps = players(session_id, &["A", "B", "C"]);
        let votes = cast(session_id, &ps, &[0, 3, 3]);

        let standings = VoteTally::count(&ps, &votes).finale_standings();

        assert_eq!(standings.winner_name(), "B");
    }

    #[test]
    fn finale_without_votes_crowns_first_participant() {
        let session_id = SessionId::new();
        let ps = players(session_id, &["A", "B"]);

        let standings = VoteTally::count(&ps, &[]).finale_standings();

        assert_eq!(standings.winner_name(), "A");
        assert_eq!(standings.eliminated, vec![*ps[1].id()]);
    }

    #[test]
    fn empty_finale_has_unknown_winner() {
        let standings = VoteTally::count(&[], &[]).finale_standings();
        assert!(standings.winner.is_none());
        assert_eq!(standings.winner_name(), UNKNOWN_WINNER);
        assert!(standings.eliminated.is_empty());
    }

    proptest! {
        #[test]
        fn total_votes_equals_votes_cast(counts in prop::collection::vec(0usize..8, 0..10)) {
            let session_id = SessionId::new();
            let names: Vec<String> = (0..counts.len()).map(|i| format!("P{}", i)).collect();
            let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let ps = players(session_id, &name_refs);
            let votes = cast(session_id, &ps, &counts);

            let tally = VoteTally::count(&ps, &votes);

            prop_assert_eq!(tally.total_votes(), votes.len() as u64);
        }

        #[test]
        fn round_eliminates_exactly_two_lowest(counts in prop::collection::vec(0usize..8, 3..12)) {
            let session_id = SessionId::new();
            let names: Vec<String> = (0..counts.len()).map(|i| format!("P{}", i)).collect();
            let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let ps = players(session_id, &name_refs);
            let votes = cast(session_id, &ps, &counts);

            let tally = VoteTally::count(&ps, &votes);
            let standings = tally.round_standings();

            prop_assert_eq!(standings.eliminated.len(), 2);
            prop_assert_eq!(standings.survivors.len(), counts.len() - 2);

            let worst_survivor = standings.survivors.iter().map(|id| tally.votes_for(id)).min();
            let best_eliminated = standings.eliminated.iter().map(|id| tally.votes_for(id)).max();
            prop_assert!(best_eliminated <= worst_survivor);
        }

        #[test]
        fn finale_winner_has_max_votes(counts in prop::collection::vec(0usize..8, 2..12)) {
            let session_id = SessionId::new();
            let names: Vec<String> = (0..counts.len()).map(|i| format!("P{}", i)).collect();
            let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let ps = players(session_id, &name_refs);
            let votes = cast(session_id, &ps, &counts);

            let standings = VoteTally::count(&ps, &votes).finale_standings();
            let max = *counts.iter().max().unwrap() as u32;
            let first_with_max = counts.iter().position(|c| *c as u32 == max).unwrap();

            let winner = standings.winner.unwrap();
            prop_assert_eq!(winner.votes, max);
            prop_assert_eq!(winner.participant_id, *ps[first_with_max].id());
            prop_assert_eq!(standings.eliminated.len(), counts.len() - 1);
        }
    }
}

//! Final-vote tallying and tie-break.

use std::collections::HashMap;

use crate::domain::player::UserId;

/// A cast ballot: a named player, or an explicit skip.
///
/// Skip is its own tally bucket, not an abstention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VoteTarget {
    Player(UserId),
    Skip,
}

/// Tally outcome for display at reveal time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteTally {
    /// Per-target counts, descending; ties ordered skip-last then by id.
    pub counts: Vec<(VoteTarget, usize)>,
    /// Unique strict-majority target, if any. Skip votes are ignored here
    /// unless they are the only votes cast.
    pub top_guess: Option<UserId>,
}

impl VoteTally {
    pub fn is_tie(&self) -> bool {
        self.top_guess.is_none() && !self.counts.is_empty()
    }
}

/// Count ballots per target and determine the top guess.
///
/// The top guess is the unique target with the strictly highest count. The
/// skip bucket is excluded from that ranking whenever at least one non-skip
/// vote exists; with only skip votes cast, skip can "win", which still
/// yields no top guess.
pub fn tally_votes(votes: &HashMap<UserId, VoteTarget>) -> VoteTally {
    let mut buckets: HashMap<VoteTarget, usize> = HashMap::new();
    for target in votes.values() {
        *buckets.entry(*target).or_insert(0) += 1;
    }

    let top_guess = top_guess(&buckets);

    let mut counts: Vec<(VoteTarget, usize)> = buckets.into_iter().collect();
    counts.sort_by(|(ta, ca), (tb, cb)| cb.cmp(ca).then_with(|| sort_key(ta).cmp(&sort_key(tb))));

    VoteTally { counts, top_guess }
}

fn top_guess(buckets: &HashMap<VoteTarget, usize>) -> Option<UserId> {
    if buckets.is_empty() {
        return None;
    }

    let non_skip: HashMap<VoteTarget, usize> = buckets
        .iter()
        .filter(|(t, _)| **t != VoteTarget::Skip)
        .map(|(t, c)| (*t, *c))
        .collect();
    let pool = if non_skip.is_empty() {
        buckets.clone()
    } else {
        non_skip
    };

    let max_votes = *pool.values().max()?;
    let mut leaders = pool
        .iter()
        .filter(|(_, c)| **c == max_votes)
        .map(|(t, _)| *t);
    match (leaders.next(), leaders.next()) {
        (Some(VoteTarget::Player(id)), None) => Some(id),
        // Unique leader that is the skip bucket (all-skip fallback), or a tie.
        _ => None,
    }
}

fn sort_key(target: &VoteTarget) -> (u8, UserId) {
    match target {
        VoteTarget::Player(id) => (0, *id),
        VoteTarget::Skip => (1, 0),
    }
}

//! Mutable per-session game state and its guarded transitions.
//!
//! Every method here runs under the owning session's lock (see
//! [`super::Session`]). A returned `GameError` means the attempted mutation
//! was not applied in any part.

use std::collections::{BTreeSet, HashMap};

use crate::domain::{Player, UserId, VoteTarget};
use crate::errors::GameError;

/// Clue recorded when a player's turn window elapses.
pub const TIMEOUT_CLUE: &str = "… (timed out)";

/// All mutable state for one game instance.
///
/// `players` and `join_order` always hold the same member set; `join_order`
/// is the single source of truth for turn order and is never reordered once
/// established.
#[derive(Debug)]
pub struct SessionState {
    pub started: bool,

    pub players: HashMap<UserId, Player>,
    pub join_order: Vec<UserId>,

    pub secret_word: Option<String>,
    pub imposters: BTreeSet<UserId>,

    pub round_no: u32,
    pub current_round_clues: HashMap<UserId, String>,
    pub history: Vec<(u32, HashMap<UserId, String>)>,
    pub expecting_clue_from: Option<UserId>,

    pub voting_open: bool,
    pub votes: HashMap<UserId, VoteTarget>,
}

impl SessionState {
    /// Fresh lobby state with the host as the first roster member.
    pub fn new_lobby(host: UserId) -> Self {
        let mut state = Self {
            started: false,
            players: HashMap::new(),
            join_order: Vec::new(),
            secret_word: None,
            imposters: BTreeSet::new(),
            round_no: 0,
            current_round_clues: HashMap::new(),
            history: Vec::new(),
            expecting_clue_from: None,
            voting_open: false,
            votes: HashMap::new(),
        };
        state.players.insert(host, Player::new(host));
        state.join_order.push(host);
        state
    }

    pub fn contains(&self, user: UserId) -> bool {
        self.players.contains_key(&user)
    }

    /// Fixed turn order: join order filtered by alive. With no ejection
    /// mechanic this is always the full roster.
    pub fn turn_order(&self) -> Vec<UserId> {
        self.join_order
            .iter()
            .filter(|id| self.players.get(id).map(|p| p.alive).unwrap_or(false))
            .copied()
            .collect()
    }

    // ---- lobby ----

    pub fn join(&mut self, user: UserId) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.contains_key(&user) {
            return Err(GameError::AlreadyJoined);
        }
        self.players.insert(user, Player::new(user));
        self.join_order.push(user);
        Ok(())
    }

    /// Remove a non-host player from the lobby. The host-leaves path tears
    /// the whole session down and never reaches this method.
    pub fn remove_from_lobby(&mut self, user: UserId) -> Result<(), GameError> {
        if self.started || !self.players.contains_key(&user) {
            return Err(GameError::NotInLobby);
        }
        self.players.remove(&user);
        self.join_order.retain(|id| *id != user);
        Ok(())
    }

    // ---- game start ----

    /// Freeze the roster and arm round one.
    pub fn begin_game(&mut self, secret_word: String, imposters: BTreeSet<UserId>) {
        self.started = true;
        self.secret_word = Some(secret_word);
        self.imposters = imposters;
        self.round_no = 0;
        self.history.clear();
        self.current_round_clues.clear();
        self.voting_open = false;
        self.votes.clear();
        self.expecting_clue_from = None;
    }

    // ---- rounds ----

    /// Advance the round counter and reset per-round fields. Returns the new
    /// round number and the fixed order for the round.
    pub fn begin_round(&mut self) -> (u32, Vec<UserId>) {
        self.round_no += 1;
        self.current_round_clues.clear();
        self.expecting_clue_from = None;
        (self.round_no, self.turn_order())
    }

    /// Validate and record a clue for the current turn holder.
    ///
    /// `clue` must already be trimmed; emptiness and length are checked
    /// before the turn checks so a malformed submission never consumes
    /// anything.
    pub fn accept_clue(
        &mut self,
        user: UserId,
        clue: &str,
        max_len: usize,
    ) -> Result<(), GameError> {
        if clue.is_empty() {
            return Err(GameError::EmptyClue);
        }
        if clue.chars().count() > max_len {
            return Err(GameError::ClueTooLong { max: max_len });
        }
        if self.voting_open {
            return Err(GameError::VotingClosed);
        }
        if !self.players.contains_key(&user) {
            return Err(GameError::NotAPlayer);
        }
        if self.expecting_clue_from != Some(user) {
            return Err(GameError::NotYourTurn);
        }
        if self.current_round_clues.contains_key(&user) {
            return Err(GameError::AlreadySubmittedThisRound);
        }
        // An exact-word clue is rejected without consuming the turn.
        if let Some(word) = &self.secret_word {
            if clue.to_uppercase() == word.to_uppercase() {
                return Err(GameError::ExactWordClue);
            }
        }
        self.current_round_clues.insert(user, clue.to_string());
        Ok(())
    }

    /// Record the timeout placeholder for a player whose window elapsed.
    /// Returns false if a clue landed concurrently.
    pub fn record_timeout_clue(&mut self, user: UserId) -> bool {
        if self.current_round_clues.contains_key(&user) {
            return false;
        }
        self.current_round_clues.insert(user, TIMEOUT_CLUE.to_string());
        true
    }

    /// Snapshot the completed round into history. Returns the round number
    /// and the clue map for the recap.
    pub fn finish_round(&mut self) -> (u32, HashMap<UserId, String>) {
        let clues = self.current_round_clues.clone();
        self.history.push((self.round_no, clues.clone()));
        (self.round_no, clues)
    }

    // ---- voting ----

    pub fn open_voting(&mut self) {
        self.voting_open = true;
        self.votes.clear();
    }

    pub fn cast_vote(&mut self, voter: UserId, target: VoteTarget) -> Result<(), GameError> {
        if !self.voting_open {
            return Err(GameError::VotingClosed);
        }
        if !self.players.contains_key(&voter) {
            return Err(GameError::NotAPlayer);
        }
        if let VoteTarget::Player(target_id) = target {
            if target_id == voter {
                return Err(GameError::SelfVote);
            }
            if !self.players.contains_key(&target_id) {
                return Err(GameError::UnknownTarget);
            }
        }
        // Last vote per voter wins; re-voting is unlimited.
        self.votes.insert(voter, target);
        Ok(())
    }

    /// Idempotent: clearing an absent vote is a no-op.
    pub fn clear_vote(&mut self, voter: UserId) -> bool {
        self.votes.remove(&voter).is_some()
    }

    /// Close the window. Returns false when it was already closed, so a
    /// late finalize timer degrades to a no-op.
    pub fn close_voting(&mut self) -> bool {
        if !self.voting_open {
            return false;
        }
        self.voting_open = false;
        true
    }
}

//! Player-facing in-game actions: clues, votes, role reveal.

use tracing::debug;

use super::{render, GameFlowService};
use crate::domain::{UserId, VoteTarget};
use crate::errors::GameError;
use crate::session::SessionKey;
use crate::state::AppState;

/// Private role information for one requester.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleReveal {
    pub is_imposter: bool,
    /// The secret word; imposters never receive it.
    pub secret_word: Option<String>,
}

impl GameFlowService {
    /// Submit a clue for the current turn. On acceptance the clue is echoed
    /// publicly and the round loop is woken.
    pub async fn submit_clue(
        &self,
        app: &AppState,
        key: SessionKey,
        user: UserId,
        text: &str,
    ) -> Result<(), GameError> {
        let session = app.registry.get(key).ok_or(GameError::NoActiveSession)?;
        let clue = text.trim();

        {
            let mut state = session.state.lock().await;
            if !state.started {
                return Err(GameError::NoActiveSession);
            }
            state.accept_clue(user, clue, app.config.max_clue_len)?;
        }

        // Wake the waiting turn window first, then echo publicly.
        session.notify_clue();
        debug!(
            community = key.community,
            channel = key.channel,
            user,
            "clue accepted"
        );
        app.outbound
            .announce(
                key.channel,
                render::clue_line(app.names.as_ref(), user, clue),
            )
            .await;
        Ok(())
    }

    /// Cast (or re-cast) a final vote. The last accepted vote per voter
    /// wins.
    pub async fn cast_vote(
        &self,
        app: &AppState,
        key: SessionKey,
        voter: UserId,
        target: VoteTarget,
    ) -> Result<(), GameError> {
        let session = app.registry.get(key).ok_or(GameError::NoActiveSession)?;
        let mut state = session.state.lock().await;
        if !state.started {
            return Err(GameError::NoActiveSession);
        }
        state.cast_vote(voter, target)?;
        debug!(
            community = key.community,
            channel = key.channel,
            voter,
            "vote recorded"
        );
        Ok(())
    }

    /// Withdraw the caller's vote if one exists. Idempotent.
    pub async fn clear_vote(
        &self,
        app: &AppState,
        key: SessionKey,
        voter: UserId,
    ) -> Result<(), GameError> {
        let session = app.registry.get(key).ok_or(GameError::NoActiveSession)?;
        let mut state = session.state.lock().await;
        state.clear_vote(voter);
        Ok(())
    }

    /// Private role lookup for the requester. Content is for the requester
    /// only; the platform layer must deliver it ephemerally.
    pub async fn reveal_role(
        &self,
        app: &AppState,
        key: SessionKey,
        user: UserId,
    ) -> Result<RoleReveal, GameError> {
        let session = app.registry.get(key).ok_or(GameError::NoActiveSession)?;
        let state = session.state.lock().await;
        if !state.started {
            return Err(GameError::NoActiveSession);
        }
        if !state.contains(user) {
            return Err(GameError::NotAPlayer);
        }

        let is_imposter = state.imposters.contains(&user);
        Ok(RoleReveal {
            is_imposter,
            secret_word: if is_imposter {
                None
            } else {
                state.secret_word.clone()
            },
        })
    }
}

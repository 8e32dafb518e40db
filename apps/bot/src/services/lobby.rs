//! Lobby lifecycle: create, join, leave, start, end.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::info;

use super::{render, GameFlowService};
use crate::domain::{draw_imposters, imposter_options, UserId};
use crate::errors::GameError;
use crate::session::{Session, SessionKey};
use crate::state::AppState;

/// What `leave` did, for the platform layer to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// The player was removed; the lobby stays open.
    Left,
    /// The host left, so the whole session was torn down.
    LobbyClosed,
}

impl GameFlowService {
    /// Create a lobby for the channel with the caller as host and first
    /// roster member. Fails if a session already occupies the key.
    pub async fn create_lobby(
        &self,
        app: &AppState,
        key: SessionKey,
        host: UserId,
    ) -> Result<Arc<Session>, GameError> {
        let session = app.registry.create(key, host)?;
        app.outbound
            .announce(
                key.channel,
                render::lobby_created(&app.config, app.names.as_ref(), host),
            )
            .await;
        Ok(session)
    }

    /// Add a player to the lobby roster. The caller must refresh the
    /// rendered lobby view afterwards.
    pub async fn join(&self, app: &AppState, key: SessionKey, user: UserId) -> Result<(), GameError> {
        let session = app.registry.get(key).ok_or(GameError::NoActiveSession)?;
        let mut state = session.state.lock().await;
        state.join(user)
    }

    /// Remove a player from the lobby. A leaving host closes the lobby
    /// entirely; other players are spliced out of the join order without
    /// reordering the rest.
    pub async fn leave(
        &self,
        app: &AppState,
        key: SessionKey,
        user: UserId,
    ) -> Result<LeaveOutcome, GameError> {
        let session = app.registry.get(key).ok_or(GameError::NoActiveSession)?;
        {
            let mut state = session.state.lock().await;
            if state.started || !state.contains(user) {
                return Err(GameError::NotInLobby);
            }
            if !session.is_host(user) {
                state.remove_from_lobby(user)?;
                return Ok(LeaveOutcome::Left);
            }
        }

        // Host left: the lobby closes for everyone.
        app.registry.remove(key);
        info!(
            community = key.community,
            channel = key.channel,
            host = user,
            "host left, lobby closed"
        );
        Ok(LeaveOutcome::LobbyClosed)
    }

    /// Start the game: freeze the roster, draw the secret word and the
    /// imposters, and hand off to the round loop.
    ///
    /// An `imposter_count` outside the offered options (1, or 1..=2 for a
    /// large enough roster) falls back to the first option.
    pub async fn start_game(
        &self,
        app: &AppState,
        key: SessionKey,
        caller: UserId,
        imposter_count: Option<usize>,
    ) -> Result<(), GameError> {
        let session = app.registry.get(key).ok_or(GameError::NoActiveSession)?;
        if !session.is_host(caller) {
            return Err(GameError::NotHost);
        }

        let order = {
            let mut state = session.state.lock().await;
            if state.started {
                return Err(GameError::AlreadyStarted);
            }
            if state.players.len() < app.config.min_players {
                return Err(GameError::NotEnoughPlayers {
                    needed: app.config.min_players,
                });
            }

            let options = imposter_options(state.players.len(), app.config.allow_two_imposters_at);
            let count = imposter_count
                .filter(|c| options.contains(c))
                .unwrap_or(options[0]);

            let mut rng = StdRng::from_os_rng();
            let order = state.turn_order();
            let secret_word = app.words.choose(&mut rng).to_string();
            let imposters = draw_imposters(&order, count, &mut rng);

            info!(
                community = key.community,
                channel = key.channel,
                players = order.len(),
                imposters = imposters.len(),
                "game started"
            );
            state.begin_game(secret_word, imposters);
            order
        };

        app.outbound
            .announce(
                key.channel,
                render::game_started(&app.config, app.names.as_ref(), &order),
            )
            .await;

        self.spawn_round_loop(app, session);
        Ok(())
    }

    /// Host-only: cancel background tasks and remove the session, whether
    /// it was a lobby or a running game.
    pub async fn end_game(&self, app: &AppState, key: SessionKey, caller: UserId) -> Result<(), GameError> {
        let session = app.registry.get(key).ok_or(GameError::NoActiveSession)?;
        if !session.is_host(caller) {
            return Err(GameError::NotHost);
        }

        app.registry.remove(key);
        info!(
            community = key.community,
            channel = key.channel,
            "game ended by host"
        );
        app.outbound
            .announce(key.channel, render::game_ended(&app.config))
            .await;
        Ok(())
    }
}

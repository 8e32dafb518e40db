//! The round loop: fixed-order turn scheduling with bounded clue windows.
//!
//! Runs as one background task per session. Cancellation (host ending the
//! game) is observed at every suspension point via the session token; on
//! cancellation the loop unwinds without emitting further turns.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{sleep, sleep_until, Instant};
use tracing::{debug, info};

use super::{render, GameFlowService};
use crate::domain::UserId;
use crate::session::Session;
use crate::state::AppState;

impl GameFlowService {
    /// Spawn the round loop for a freshly started game, replacing any
    /// predecessor task.
    pub(super) fn spawn_round_loop(&self, app: &AppState, session: Arc<Session>) {
        let app = app.clone();
        let token = session.cancel_token();
        let service = *self;
        let runner = Arc::clone(&session);
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    debug!(
                        community = runner.key.community,
                        channel = runner.key.channel,
                        "round loop cancelled"
                    );
                }
                _ = service.run_rounds(&app, &runner) => {}
            }
        });
        session.set_round_task(handle);
    }

    /// Drive rounds until the final-vote threshold, then hand off to the
    /// vote coordinator.
    async fn run_rounds(&self, app: &AppState, session: &Arc<Session>) {
        let channel = session.key.channel;
        loop {
            let (round_no, order) = {
                let mut state = session.state.lock().await;
                if state.voting_open {
                    return;
                }
                state.begin_round()
            };
            info!(
                community = session.key.community,
                channel,
                round = round_no,
                "round begins"
            );
            app.outbound
                .announce(
                    channel,
                    render::round_start(app.names.as_ref(), round_no, &order),
                )
                .await;

            for player in &order {
                {
                    let mut state = session.state.lock().await;
                    if state.voting_open {
                        return;
                    }
                    state.expecting_clue_from = Some(*player);
                }
                app.outbound
                    .announce(
                        channel,
                        render::turn_prompt(&app.config, app.names.as_ref(), *player),
                    )
                    .await;

                let submitted = self
                    .wait_for_clue(session, *player, app.config.turn_timeout)
                    .await;
                if !submitted {
                    let recorded = {
                        let mut state = session.state.lock().await;
                        state.record_timeout_clue(*player)
                    };
                    if recorded {
                        debug!(channel, player, round = round_no, "turn timed out");
                        app.outbound
                            .announce(channel, render::timeout_line(app.names.as_ref(), *player))
                            .await;
                    }
                }

                {
                    let mut state = session.state.lock().await;
                    state.expecting_clue_from = None;
                }

                // Pacing between turns, not a correctness requirement.
                sleep(app.config.between_turns).await;
            }

            let (round_no, clues) = {
                let mut state = session.state.lock().await;
                state.finish_round()
            };
            app.outbound
                .announce(
                    channel,
                    render::round_recap(app.names.as_ref(), round_no, &order, &clues),
                )
                .await;

            if round_no >= app.config.rounds_before_final_vote {
                self.open_voting(app, session).await;
                return;
            }
        }
    }

    /// Wait for `player`'s clue to land, up to `window`.
    ///
    /// Event-driven rather than interval polling: the clue notifier is
    /// armed before each state check, so a submission racing the check
    /// still wakes the loop.
    async fn wait_for_clue(&self, session: &Session, player: UserId, window: Duration) -> bool {
        let deadline = Instant::now() + window;
        loop {
            let submitted = session.clue_submitted();
            tokio::pin!(submitted);
            // Register the waiter before re-checking state; a submission
            // landing between the check and the await still wakes us.
            submitted.as_mut().enable();
            {
                let state = session.state.lock().await;
                if state.current_round_clues.contains_key(&player) {
                    return true;
                }
            }
            tokio::select! {
                _ = &mut submitted => {}
                _ = sleep_until(deadline) => return false,
            }
        }
    }
}

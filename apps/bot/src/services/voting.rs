//! The final vote: bounded window, tally, reveal, teardown.

use std::sync::Arc;

use tracing::info;

use super::{render, GameFlowService};
use crate::domain::{tally_votes, UserId};
use crate::session::Session;
use crate::state::AppState;

impl GameFlowService {
    /// Open the voting window and arm the finalize timer, replacing any
    /// predecessor timer.
    pub(super) async fn open_voting(&self, app: &AppState, session: &Arc<Session>) {
        let electorate = {
            let mut state = session.state.lock().await;
            state.open_voting();
            state.turn_order()
        };
        info!(
            community = session.key.community,
            channel = session.key.channel,
            voters = electorate.len(),
            "voting opened"
        );
        app.outbound
            .announce(
                session.key.channel,
                render::vote_prompt(app.names.as_ref(), &electorate),
            )
            .await;

        let service = *self;
        let app = app.clone();
        let timer_session = Arc::clone(session);
        let token = session.cancel_token();
        let handle = tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(app.config.vote_timeout) => {
                    service.finalize_voting(&app, &timer_session).await;
                }
            }
        });
        session.set_vote_task(handle);
    }

    /// Close the window, tally, reveal, and tear the session down.
    ///
    /// Safe to call from the timer and from an early force-close path: the
    /// first caller to flip the window closed does the work, later calls
    /// are no-ops.
    pub async fn finalize_voting(&self, app: &AppState, session: &Arc<Session>) {
        let (secret_word, imposters, tally) = {
            let mut state = session.state.lock().await;
            if !state.close_voting() {
                return;
            }
            let tally = tally_votes(&state.votes);
            let secret_word = state.secret_word.clone().unwrap_or_else(|| "—".to_string());
            let imposters: Vec<UserId> = state.imposters.iter().copied().collect();
            (secret_word, imposters, tally)
        };

        info!(
            community = session.key.community,
            channel = session.key.channel,
            ballots = tally.counts.iter().map(|(_, c)| c).sum::<usize>(),
            top_guess = ?tally.top_guess,
            "voting finalized"
        );

        app.outbound
            .announce(
                session.key.channel,
                render::reveal(app.names.as_ref(), &secret_word, &imposters, &tally),
            )
            .await;
        app.outbound
            .announce(session.key.channel, render::game_ended(&app.config))
            .await;

        // Teardown is unconditional after the reveal, whichever path got
        // here first.
        app.registry.remove(session.key);
    }
}

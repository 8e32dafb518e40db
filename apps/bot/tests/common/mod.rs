#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use bot::config::GameConfig;
use bot::session::{Session, SessionKey};
use bot::state::AppState;
use bot::test_support::{test_state, RecordingOutbound};
use bot::GameFlowService;
use bot_test_support::unique_helpers::unique_channel;

// Logging is auto-installed for every test binary including this module.
#[ctor::ctor]
fn init_logging() {
    bot_test_support::logging::init();
}

/// Everything a game test needs: state, recorded output, and a fresh key.
pub struct TestCtx {
    pub app: AppState,
    pub outbound: Arc<RecordingOutbound>,
    pub service: GameFlowService,
    pub key: SessionKey,
}

pub fn setup() -> TestCtx {
    setup_with(GameConfig::default())
}

pub fn setup_with(config: GameConfig) -> TestCtx {
    let (app, outbound) = test_state(config);
    let (community, channel) = unique_channel();
    TestCtx {
        app,
        outbound,
        service: GameFlowService::new(),
        key: SessionKey::new(community, channel),
    }
}

/// Create a lobby hosted by `players[0]` and join the rest.
pub async fn lobby_with(ctx: &TestCtx, players: &[u64]) -> Arc<Session> {
    let session = ctx
        .service
        .create_lobby(&ctx.app, ctx.key, players[0])
        .await
        .expect("create lobby");
    for player in &players[1..] {
        ctx.service
            .join(&ctx.app, ctx.key, *player)
            .await
            .expect("join lobby");
    }
    session
}

/// Create a lobby and start the game with one imposter.
pub async fn started_game(ctx: &TestCtx, players: &[u64]) -> Arc<Session> {
    let session = lobby_with(ctx, players).await;
    ctx.service
        .start_game(&ctx.app, ctx.key, players[0], Some(1))
        .await
        .expect("start game");
    session
}

const POLL: Duration = Duration::from_millis(10);
const POLL_LIMIT: usize = 20_000;

/// Wait (virtual time) until the turn cursor lands on `player`.
pub async fn wait_for_turn(session: &Session, player: u64) {
    for _ in 0..POLL_LIMIT {
        {
            let state = session.state.lock().await;
            if state.expecting_clue_from == Some(player) {
                return;
            }
        }
        tokio::time::sleep(POLL).await;
    }
    panic!("turn cursor never reached player {player}");
}

/// Wait (virtual time) until the voting window is open.
pub async fn wait_for_voting_open(session: &Session) {
    for _ in 0..POLL_LIMIT {
        {
            let state = session.state.lock().await;
            if state.voting_open {
                return;
            }
        }
        tokio::time::sleep(POLL).await;
    }
    panic!("voting never opened");
}

/// Submit a clue for every player of a round, in turn order.
pub async fn play_round(ctx: &TestCtx, session: &Session, players: &[u64], round: u32) {
    for player in players {
        wait_for_turn(session, *player).await;
        ctx.service
            .submit_clue(&ctx.app, ctx.key, *player, &format!("clue-{player}-{round}"))
            .await
            .expect("submit clue");
    }
}

/// Play every round up to the final-vote threshold and wait for voting.
pub async fn play_to_voting(ctx: &TestCtx, session: &Session, players: &[u64]) {
    let rounds = ctx.app.config.rounds_before_final_vote;
    for round in 1..=rounds {
        play_round(ctx, session, players, round).await;
    }
    wait_for_voting_open(session).await;
}

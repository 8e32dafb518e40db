mod common;

use std::time::Duration;

use bot::domain::VoteTarget;
use bot::errors::GameError;
use common::{play_to_voting, setup, started_game};

#[tokio::test(start_paused = true)]
async fn votes_before_the_window_opens_are_rejected() {
    let ctx = setup();
    started_game(&ctx, &[1, 2, 3]).await;
    assert_eq!(
        ctx.service
            .cast_vote(&ctx.app, ctx.key, 1, VoteTarget::Player(2))
            .await,
        Err(GameError::VotingClosed)
    );
}

#[tokio::test(start_paused = true)]
async fn vote_validation_rules() {
    let ctx = setup();
    let session = started_game(&ctx, &[1, 2, 3]).await;
    play_to_voting(&ctx, &session, &[1, 2, 3]).await;

    assert_eq!(
        ctx.service
            .cast_vote(&ctx.app, ctx.key, 99, VoteTarget::Skip)
            .await,
        Err(GameError::NotAPlayer)
    );
    assert_eq!(
        ctx.service
            .cast_vote(&ctx.app, ctx.key, 1, VoteTarget::Player(1))
            .await,
        Err(GameError::SelfVote)
    );
    assert_eq!(
        ctx.service
            .cast_vote(&ctx.app, ctx.key, 1, VoteTarget::Player(99))
            .await,
        Err(GameError::UnknownTarget)
    );
    ctx.service
        .cast_vote(&ctx.app, ctx.key, 1, VoteTarget::Skip)
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn last_vote_per_voter_wins() {
    let ctx = setup();
    let session = started_game(&ctx, &[1, 2, 3]).await;
    play_to_voting(&ctx, &session, &[1, 2, 3]).await;

    ctx.service
        .cast_vote(&ctx.app, ctx.key, 1, VoteTarget::Player(2))
        .await
        .unwrap();
    ctx.service
        .cast_vote(&ctx.app, ctx.key, 1, VoteTarget::Player(3))
        .await
        .unwrap();

    let state = session.state.lock().await;
    assert_eq!(state.votes.get(&1), Some(&VoteTarget::Player(3)));
    assert_eq!(state.votes.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn clear_vote_is_idempotent() {
    let ctx = setup();
    let session = started_game(&ctx, &[1, 2, 3]).await;
    play_to_voting(&ctx, &session, &[1, 2, 3]).await;

    ctx.service
        .cast_vote(&ctx.app, ctx.key, 1, VoteTarget::Player(2))
        .await
        .unwrap();
    ctx.service.clear_vote(&ctx.app, ctx.key, 1).await.unwrap();
    ctx.service.clear_vote(&ctx.app, ctx.key, 1).await.unwrap();
    assert!(session.state.lock().await.votes.is_empty());
}

#[tokio::test(start_paused = true)]
async fn timeout_tallies_and_reveals_a_clear_top_guess() {
    let ctx = setup();
    let session = started_game(&ctx, &[1, 2, 3]).await;
    play_to_voting(&ctx, &session, &[1, 2, 3]).await;

    // 1 and 3 accuse 2; 2 skips. Top guess: player 2 with 2 votes.
    ctx.service
        .cast_vote(&ctx.app, ctx.key, 1, VoteTarget::Player(2))
        .await
        .unwrap();
    ctx.service
        .cast_vote(&ctx.app, ctx.key, 3, VoteTarget::Player(2))
        .await
        .unwrap();
    ctx.service
        .cast_vote(&ctx.app, ctx.key, 2, VoteTarget::Skip)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_secs(61)).await;

    assert!(ctx.outbound.contains("Top vote guess: <@2>"));
    assert!(ctx.outbound.contains("🗳 <@2>: **2**"));
    assert!(ctx.outbound.contains("⏭️ Skip: **1**"));
    assert!(ctx.outbound.contains("The secret word was **PIZZA**"));
    // Teardown is unconditional after the reveal.
    assert!(ctx.app.registry.get(ctx.key).is_none());
}

#[tokio::test(start_paused = true)]
async fn an_even_split_reports_a_tie() {
    let ctx = setup();
    let players = [1u64, 2, 3, 4];
    let session = started_game(&ctx, &players).await;
    play_to_voting(&ctx, &session, &players).await;

    // 2-2 between players 2 and 1.
    for (voter, target) in [(1u64, 2u64), (3, 2), (2, 1), (4, 1)] {
        ctx.service
            .cast_vote(&ctx.app, ctx.key, voter, VoteTarget::Player(target))
            .await
            .unwrap();
    }

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert!(ctx.outbound.contains("tie / no clear top guess"));
    assert!(ctx.app.registry.get(ctx.key).is_none());
}

#[tokio::test(start_paused = true)]
async fn reveal_names_the_imposters() {
    let ctx = setup();
    let session = started_game(&ctx, &[1, 2, 3]).await;
    let imposter = *session
        .state
        .lock()
        .await
        .imposters
        .iter()
        .next()
        .unwrap();
    play_to_voting(&ctx, &session, &[1, 2, 3]).await;

    tokio::time::sleep(Duration::from_secs(61)).await;
    assert!(ctx
        .outbound
        .contains(&format!("Imposter(s): <@{imposter}>")));
    assert!(ctx.outbound.contains("No votes were cast."));
}

#[tokio::test(start_paused = true)]
async fn votes_after_the_window_closes_are_rejected() {
    let ctx = setup();
    let session = started_game(&ctx, &[1, 2, 3]).await;
    play_to_voting(&ctx, &session, &[1, 2, 3]).await;

    tokio::time::sleep(Duration::from_secs(61)).await;

    // The session is gone; a late ballot cannot land anywhere.
    assert_eq!(
        ctx.service
            .cast_vote(&ctx.app, ctx.key, 1, VoteTarget::Player(2))
            .await,
        Err(GameError::NoActiveSession)
    );
}

mod common;

use std::time::Duration;

use bot::domain::VoteTarget;
use bot::session::TIMEOUT_CLUE;
use common::{setup, wait_for_turn, wait_for_voting_open};

/// Full game: three players join, the host starts with one imposter, three
/// rounds run (with one timeout along the way), the vote tallies, and the
/// session is gone.
#[tokio::test(start_paused = true)]
async fn three_players_play_a_complete_game() {
    let ctx = setup();
    let players = [10u64, 20, 30];

    ctx.service
        .create_lobby(&ctx.app, ctx.key, 10)
        .await
        .unwrap();
    ctx.service.join(&ctx.app, ctx.key, 20).await.unwrap();
    ctx.service.join(&ctx.app, ctx.key, 30).await.unwrap();
    ctx.service
        .start_game(&ctx.app, ctx.key, 10, Some(1))
        .await
        .unwrap();

    let session = ctx.app.registry.get(ctx.key).unwrap();

    // Exactly one imposter, drawn from the roster; the word is frozen.
    {
        let state = session.state.lock().await;
        assert_eq!(state.imposters.len(), 1);
        assert!(state.contains(*state.imposters.iter().next().unwrap()));
        assert_eq!(state.secret_word.as_deref(), Some("PIZZA"));
    }

    // Roles are consistent: one imposter without the word, two civilians
    // with it.
    let mut imposter_count = 0;
    for player in &players {
        let reveal = ctx
            .service
            .reveal_role(&ctx.app, ctx.key, *player)
            .await
            .unwrap();
        if reveal.is_imposter {
            imposter_count += 1;
            assert!(reveal.secret_word.is_none());
        } else {
            assert_eq!(reveal.secret_word.as_deref(), Some("PIZZA"));
        }
    }
    assert_eq!(imposter_count, 1);

    // Three rounds; player 30 sleeps through round 2.
    for round in 1..=3u32 {
        for player in &players {
            wait_for_turn(&session, *player).await;
            if round == 2 && *player == 30 {
                tokio::time::sleep(Duration::from_secs(76)).await;
            } else {
                ctx.service
                    .submit_clue(&ctx.app, ctx.key, *player, &format!("hint-{round}"))
                    .await
                    .unwrap();
            }
        }
    }

    wait_for_voting_open(&session).await;
    {
        let state = session.state.lock().await;
        assert_eq!(state.history.len(), 3);
        for (round_no, clues) in &state.history {
            assert_eq!(clues.len(), players.len(), "round {round_no} incomplete");
        }
        assert_eq!(state.history[1].1.get(&30).unwrap(), TIMEOUT_CLUE);
    }

    // Everyone accuses player 20.
    ctx.service
        .cast_vote(&ctx.app, ctx.key, 10, VoteTarget::Player(20))
        .await
        .unwrap();
    ctx.service
        .cast_vote(&ctx.app, ctx.key, 30, VoteTarget::Player(20))
        .await
        .unwrap();
    ctx.service
        .cast_vote(&ctx.app, ctx.key, 20, VoteTarget::Skip)
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_secs(61)).await;

    assert!(ctx.outbound.contains("Top vote guess: <@20>"));
    assert!(ctx.outbound.contains("The secret word was **PIZZA**"));
    assert!(ctx.outbound.contains("Game ended"));
    assert!(ctx.app.registry.get(ctx.key).is_none());
    assert!(session.is_cancelled());
}

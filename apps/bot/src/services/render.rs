//! Announcement text building.
//!
//! All user-visible strings the engine sends through the presentation sink
//! are assembled here, via the identity resolver. Widget/embed layout is
//! the platform adapter's concern; the engine only produces content.

use crate::config::GameConfig;
use crate::domain::{UserId, VoteTally, VoteTarget};
use crate::outbound::NameResolver;
use crate::services::player_actions::RoleReveal;
use crate::session::TIMEOUT_CLUE;
use std::collections::HashMap;

/// Most vote-summary entries shown at reveal.
pub const VOTE_SUMMARY_CAP: usize = 12;

pub fn mention_list(names: &dyn NameResolver, ids: &[UserId]) -> String {
    if ids.is_empty() {
        return "—".to_string();
    }
    ids.iter()
        .map(|id| names.mention(*id))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn lobby_created(config: &GameConfig, names: &dyn NameResolver, host: UserId) -> String {
    format!(
        "🎭 Imposter — lobby open. Host: {}. Join now; the host runs \
         {}startgame again to begin.",
        names.mention(host),
        config.command_prefix
    )
}

pub fn game_started(config: &GameConfig, names: &dyn NameResolver, order: &[UserId]) -> String {
    format!(
        "🚀 Game started! Order is fixed: {}. Reveal your role privately. \
         {} rounds, then a final vote and the reveal.",
        mention_list(names, order),
        config.rounds_before_final_vote
    )
}

pub fn round_start(names: &dyn NameResolver, round_no: u32, order: &[UserId]) -> String {
    format!(
        "🌀 Round {round_no} begins! Order is fixed: {}",
        mention_list(names, order)
    )
}

pub fn turn_prompt(config: &GameConfig, names: &dyn NameResolver, player: UserId) -> String {
    format!(
        "✍️ It's {}'s turn — submit your clue. Timeout: {}s",
        names.mention(player),
        config.turn_timeout.as_secs()
    )
}

pub fn clue_line(names: &dyn NameResolver, player: UserId, clue: &str) -> String {
    format!("**{}:** {clue}", names.display_name(player))
}

pub fn timeout_line(names: &dyn NameResolver, player: UserId) -> String {
    format!("**{}:** {TIMEOUT_CLUE}", names.display_name(player))
}

pub fn round_recap(
    names: &dyn NameResolver,
    round_no: u32,
    order: &[UserId],
    clues: &HashMap<UserId, String>,
) -> String {
    let mut lines = vec![format!("📜 Round {round_no} recap:")];
    for player in order {
        let clue = clues.get(player).map(String::as_str).unwrap_or("—");
        lines.push(format!("• **{}:** `{clue}`", names.display_name(*player)));
    }
    lines.join("\n")
}

pub fn vote_prompt(names: &dyn NameResolver, electorate: &[UserId]) -> String {
    format!(
        "🗳 Final vote! Who is the imposter? Players: {}",
        mention_list(names, electorate)
    )
}

pub fn reveal(
    names: &dyn NameResolver,
    secret_word: &str,
    imposters: &[UserId],
    tally: &VoteTally,
) -> String {
    let mut lines = vec![
        format!("🎬 Reveal! The secret word was **{secret_word}**."),
        format!("Imposter(s): {}", mention_list(names, imposters)),
    ];

    match tally.top_guess {
        Some(id) => lines.push(format!("Top vote guess: {}", names.mention(id))),
        None => lines.push("Top vote guess: tie / no clear top guess.".to_string()),
    }

    if tally.counts.is_empty() {
        lines.push("No votes were cast.".to_string());
    } else {
        for (target, count) in tally.counts.iter().take(VOTE_SUMMARY_CAP) {
            match target {
                VoteTarget::Skip => lines.push(format!("⏭️ Skip: **{count}**")),
                VoteTarget::Player(id) => {
                    lines.push(format!("🗳 {}: **{count}**", names.mention(*id)))
                }
            }
        }
    }

    lines.join("\n")
}

pub fn game_ended(config: &GameConfig) -> String {
    format!(
        "🧹 Game ended. Lobby cleared — use {}startgame to open a new one.",
        config.command_prefix
    )
}

pub fn role_reveal(reveal: &RoleReveal) -> String {
    if reveal.is_imposter {
        "🕵️ You are the IMPOSTER. You don't know the word — blend in.".to_string()
    } else {
        format!(
            "✅ You are a CIVILIAN. The secret word is **{}** — hint at it \
             without saying it.",
            reveal.secret_word.as_deref().unwrap_or("—")
        )
    }
}

pub fn help_text(config: &GameConfig) -> String {
    let p = &config.command_prefix;
    format!(
        "🎭 Imposter — commands: `{p}help` `{p}rules` `{p}startgame` `{p}endgame`. \
         Join from the lobby message; turn order is fixed by join order. \
         After start, reveal your role privately. {} rounds of clues, a recap \
         each round, then a final vote and the reveal.",
        config.rounds_before_final_vote
    )
}

pub fn rules_text(config: &GameConfig) -> String {
    format!(
        "📜 Rules: on your turn submit a short clue (max {} characters, never \
         the exact word). Order is fixed by join order. After round {} everyone \
         votes for who they think the imposter is; then roles and the word are \
         revealed.",
        config.max_clue_len, config.rounds_before_final_vote
    )
}

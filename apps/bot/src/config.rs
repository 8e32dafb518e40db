//! Game configuration.
//!
//! All tunables recognized by the engine, read from the environment with
//! built-in defaults. Environment variables must be set by the runtime
//! environment (Docker env_file, or sourced manually for local dev).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::AppError;

/// Tunables for lobby, round, and vote behavior.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Prefix for chat commands (`!startgame` etc.).
    pub command_prefix: String,
    /// Path to the word list file.
    pub words_file: PathBuf,
    /// Minimum roster size required to start.
    pub min_players: usize,
    /// Maximum accepted clue length in characters.
    pub max_clue_len: usize,
    /// Per-player clue window.
    pub turn_timeout: Duration,
    /// Pacing pause between turns.
    pub between_turns: Duration,
    /// Completed rounds before the final vote opens.
    pub rounds_before_final_vote: u32,
    /// Final-vote window.
    pub vote_timeout: Duration,
    /// Roster size at which the host may pick 2 imposters.
    pub allow_two_imposters_at: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            command_prefix: "!".to_string(),
            words_file: PathBuf::from("words.txt"),
            min_players: 3,
            max_clue_len: 80,
            turn_timeout: Duration::from_secs(75),
            between_turns: Duration::from_millis(600),
            rounds_before_final_vote: 3,
            vote_timeout: Duration::from_secs(60),
            allow_two_imposters_at: 7,
        }
    }
}

impl GameConfig {
    /// Build a config from the environment, falling back to defaults.
    ///
    /// Recognized variables: `IMPOSTER_PREFIX`, `IMPOSTER_WORDS_FILE`,
    /// `IMPOSTER_MIN_PLAYERS`, `IMPOSTER_MAX_CLUE_LEN`,
    /// `IMPOSTER_TURN_TIMEOUT_SECS`, `IMPOSTER_BETWEEN_TURNS_MS`,
    /// `IMPOSTER_ROUNDS_BEFORE_FINAL_VOTE`, `IMPOSTER_VOTE_TIMEOUT_SECS`,
    /// `IMPOSTER_TWO_IMPOSTERS_AT`. Unparseable values are config errors.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        Ok(Self {
            command_prefix: env::var("IMPOSTER_PREFIX").unwrap_or(defaults.command_prefix),
            words_file: env::var("IMPOSTER_WORDS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.words_file),
            min_players: parsed_var("IMPOSTER_MIN_PLAYERS", defaults.min_players)?,
            max_clue_len: parsed_var("IMPOSTER_MAX_CLUE_LEN", defaults.max_clue_len)?,
            turn_timeout: Duration::from_secs(parsed_var(
                "IMPOSTER_TURN_TIMEOUT_SECS",
                defaults.turn_timeout.as_secs(),
            )?),
            between_turns: Duration::from_millis(parsed_var(
                "IMPOSTER_BETWEEN_TURNS_MS",
                defaults.between_turns.as_millis() as u64,
            )?),
            rounds_before_final_vote: parsed_var(
                "IMPOSTER_ROUNDS_BEFORE_FINAL_VOTE",
                defaults.rounds_before_final_vote,
            )?,
            vote_timeout: Duration::from_secs(parsed_var(
                "IMPOSTER_VOTE_TIMEOUT_SECS",
                defaults.vote_timeout.as_secs(),
            )?),
            allow_two_imposters_at: parsed_var(
                "IMPOSTER_TWO_IMPOSTERS_AT",
                defaults.allow_two_imposters_at,
            )?,
        })
    }
}

/// Read an env var parsed as `T`, or the default when unset.
fn parsed_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| AppError::config(format!("'{name}' must be a valid number, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}

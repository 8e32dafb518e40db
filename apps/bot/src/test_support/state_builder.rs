//! `AppState` construction for tests: recording sink, raw-id names, and an
//! in-memory word pool.

use std::sync::Arc;

use crate::config::GameConfig;
use crate::domain::WordList;
use crate::outbound::RawIdNames;
use crate::state::AppState;

use super::RecordingOutbound;

/// State with the given config and a single-word pool, so the secret word
/// is known to assertions.
pub fn test_state(config: GameConfig) -> (AppState, Arc<RecordingOutbound>) {
    test_state_with_words(config, &["PIZZA"])
}

pub fn test_state_with_words(
    config: GameConfig,
    words: &[&str],
) -> (AppState, Arc<RecordingOutbound>) {
    let outbound = Arc::new(RecordingOutbound::new());
    let state = AppState::new(
        config,
        WordList::from_lines(words.iter().copied()),
        outbound.clone(),
        Arc::new(RawIdNames),
    );
    (state, outbound)
}

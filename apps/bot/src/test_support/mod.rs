//! Helpers for exercising the engine without a chat platform.
//!
//! Used by the integration tests (and available to bench/demo harnesses):
//! a recording presentation sink and an `AppState` builder wired to it.

pub mod recording;
pub mod state_builder;

pub use recording::RecordingOutbound;
pub use state_builder::{test_state, test_state_with_words};

#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod outbound;
pub mod registry;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod test_support;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::GameConfig;
pub use error::AppError;
pub use errors::{ErrorCode, GameError};
pub use registry::SessionRegistry;
pub use services::GameFlowService;
pub use session::{Session, SessionKey, SessionState};
pub use state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::config::*;
    pub use super::domain::*;
    pub use super::error::*;
    pub use super::errors::*;
    pub use super::services::*;
    pub use super::session::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

//! Logging initialization shared by integration test binaries.
//!
//! Install once per process, never panic on double init. Level precedence:
//! `TEST_LOG`, then `RUST_LOG`, then `warn` (quiet by default). The test
//! writer keeps output attached to the owning test under cargo/nextest.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Idempotent, race-safe subscriber install for tests.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

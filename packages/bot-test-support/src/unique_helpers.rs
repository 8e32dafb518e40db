//! Unique id generation for test isolation.
//!
//! Sessions are keyed by (community, channel); tests sharing a process must
//! not collide on keys. A process-wide counter keeps every generated id
//! distinct.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1_000);

/// A process-unique numeric id.
pub fn unique_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A process-unique (community, channel) pair.
pub fn unique_channel() -> (u64, u64) {
    (unique_id(), unique_id())
}

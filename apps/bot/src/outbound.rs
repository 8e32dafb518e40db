//! Boundary contracts toward the chat platform.
//!
//! The engine talks to the platform only through these traits: a
//! fire-and-forget presentation sink and a read-only identity resolver.
//! Delivery failures are the implementation's problem; the engine never
//! depends on them for correctness.

use async_trait::async_trait;
use tracing::info;

use crate::domain::{ChannelId, UserId};

/// Fire-and-forget channel notifications.
///
/// Implementations must swallow platform failures (log and continue); an
/// in-progress round or vote must never abort because a message could not
/// be rendered.
#[async_trait]
pub trait Outbound: Send + Sync {
    async fn announce(&self, channel: ChannelId, content: String);
}

/// Human-readable rendering of user ids. Never used for game logic.
pub trait NameResolver: Send + Sync {
    fn display_name(&self, user: UserId) -> String;
    fn mention(&self, user: UserId) -> String;
}

/// Sink that writes announcements to the log. Stands in wherever no chat
/// gateway is wired up (local runs, liveness-only deployments).
#[derive(Debug, Default)]
pub struct LogOutbound;

#[async_trait]
impl Outbound for LogOutbound {
    async fn announce(&self, channel: ChannelId, content: String) {
        info!(channel, %content, "announce");
    }
}

/// Resolver rendering raw ids in platform mention syntax.
#[derive(Debug, Default)]
pub struct RawIdNames;

impl NameResolver for RawIdNames {
    fn display_name(&self, user: UserId) -> String {
        user.to_string()
    }

    fn mention(&self, user: UserId) -> String {
        format!("<@{user}>")
    }
}

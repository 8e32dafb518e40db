//! One live game session: state behind a single lock, plus the
//! notification and cancellation plumbing for its background tasks.

pub mod state;

use tokio::sync::futures::Notified;
use tokio::sync::{Mutex, Notify};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::domain::{ChannelId, CommunityId, UserId};
pub use state::{SessionState, TIMEOUT_CLUE};

/// Registry key: one session at most per community+channel pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionKey {
    pub community: CommunityId,
    pub channel: ChannelId,
}

impl SessionKey {
    pub fn new(community: CommunityId, channel: ChannelId) -> Self {
        Self { community, channel }
    }
}

#[derive(Default)]
struct TaskHandles {
    round_loop: Option<JoinHandle<()>>,
    vote_finalize: Option<JoinHandle<()>>,
}

/// A session owns all mutable state for one game instance.
///
/// Every read-modify-write goes through `state` (one `tokio::sync::Mutex`);
/// the lock is released before any outward notification is sent. Background
/// tasks (round loop, vote finalize) are tracked so starting a replacement
/// cancels its predecessor, and `shutdown` aborts both.
pub struct Session {
    pub key: SessionKey,
    pub host: UserId,
    pub state: Mutex<SessionState>,
    clue_notify: Notify,
    cancel: CancellationToken,
    tasks: parking_lot::Mutex<TaskHandles>,
}

impl Session {
    /// New lobby-phase session with the host as first roster member.
    pub fn new(key: SessionKey, host: UserId) -> Self {
        Self {
            key,
            host,
            state: Mutex::new(SessionState::new_lobby(host)),
            clue_notify: Notify::new(),
            cancel: CancellationToken::new(),
            tasks: parking_lot::Mutex::new(TaskHandles::default()),
        }
    }

    pub fn is_host(&self, user: UserId) -> bool {
        user == self.host
    }

    /// Wake the round loop after a clue lands. Call after releasing the
    /// state lock.
    pub fn notify_clue(&self) {
        self.clue_notify.notify_waiters();
    }

    /// Future completing on the next `notify_clue`. Create it BEFORE
    /// re-checking state so a submission between check and await cannot be
    /// missed.
    pub fn clue_submitted(&self) -> Notified<'_> {
        self.clue_notify.notified()
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Install the round-loop task, aborting any predecessor so at most one
    /// loop runs per session.
    pub fn set_round_task(&self, handle: JoinHandle<()>) {
        let prev = {
            let mut tasks = self.tasks.lock();
            tasks.round_loop.replace(handle)
        };
        if let Some(prev) = prev {
            debug!(community = self.key.community, channel = self.key.channel, "replacing round loop task");
            prev.abort();
        }
    }

    /// Install the vote-finalize task, aborting any predecessor so at most
    /// one finalize timer runs per session.
    pub fn set_vote_task(&self, handle: JoinHandle<()>) {
        let prev = {
            let mut tasks = self.tasks.lock();
            tasks.vote_finalize.replace(handle)
        };
        if let Some(prev) = prev {
            debug!(community = self.key.community, channel = self.key.channel, "replacing vote finalize task");
            prev.abort();
        }
    }

    /// Cancel and abort all background work. Idempotent; safe to call from
    /// within one of the tasks being shut down (the abort lands at its next
    /// suspension point, of which a finishing task has none).
    pub fn shutdown(&self) {
        self.cancel.cancel();
        let (round_loop, vote_finalize) = {
            let mut tasks = self.tasks.lock();
            (tasks.round_loop.take(), tasks.vote_finalize.take())
        };
        if let Some(handle) = round_loop {
            handle.abort();
        }
        if let Some(handle) = vote_finalize {
            handle.abort();
        }
    }
}

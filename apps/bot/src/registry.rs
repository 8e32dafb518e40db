//! Process-wide session registry.
//!
//! Maps a community+channel key to at most one live session. `DashMap`
//! entries give atomic create-if-absent and remove-once semantics under
//! concurrent join/leave/start traffic; per-key operations on different
//! sessions never contend.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::info;

use crate::domain::UserId;
use crate::errors::GameError;
use crate::session::{Session, SessionKey};

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<SessionKey, Arc<Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn get(&self, key: SessionKey) -> Option<Arc<Session>> {
        self.sessions.get(&key).map(|entry| entry.value().clone())
    }

    /// Create a session for the key, failing if one already exists. The
    /// host is the first roster member.
    pub fn create(&self, key: SessionKey, host: UserId) -> Result<Arc<Session>, GameError> {
        match self.sessions.entry(key) {
            Entry::Occupied(_) => Err(GameError::SessionExists),
            Entry::Vacant(vacant) => {
                let session = Arc::new(Session::new(key, host));
                vacant.insert(session.clone());
                info!(
                    community = key.community,
                    channel = key.channel,
                    host,
                    "session created"
                );
                Ok(session)
            }
        }
    }

    /// Remove and shut down the session for the key.
    ///
    /// The map removal is atomic, so of several racing teardown paths
    /// (explicit end, natural completion, host leaving the lobby) exactly
    /// one observes the session and runs its shutdown.
    pub fn remove(&self, key: SessionKey) -> Option<Arc<Session>> {
        let removed = self.sessions.remove(&key).map(|(_, session)| session);
        if let Some(session) = &removed {
            session.shutdown();
            info!(
                community = key.community,
                channel = key.channel,
                "session removed"
            );
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

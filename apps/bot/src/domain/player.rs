//! Player identity and roster entry types.

/// Opaque platform user id.
pub type UserId = u64;
/// Opaque community (guild/server) id.
pub type CommunityId = u64;
/// Opaque channel id.
pub type ChannelId = u64;

/// One roster entry.
///
/// `alive` is reserved for a future ejection mechanic; current rules never
/// flip it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    pub user_id: UserId,
    pub alive: bool,
}

impl Player {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            alive: true,
        }
    }
}

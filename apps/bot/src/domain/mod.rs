//! Pure game logic: identities, word pool, role draws, and vote tallying.
//!
//! Nothing here locks, spawns, or performs I/O beyond the word loader;
//! everything is directly unit-testable.

pub mod player;
pub mod roles;
pub mod tally;
pub mod words;

pub use player::{ChannelId, CommunityId, Player, UserId};
pub use roles::{draw_imposters, imposter_options};
pub use tally::{tally_votes, VoteTally, VoteTarget};
pub use words::WordList;

//! A presentation sink that records every announcement.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::ChannelId;
use crate::outbound::Outbound;

#[derive(Debug, Default)]
pub struct RecordingOutbound {
    messages: Mutex<Vec<(ChannelId, String)>>,
}

impl RecordingOutbound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything announced so far, in order.
    pub fn messages(&self) -> Vec<(ChannelId, String)> {
        self.messages.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.lock().is_empty()
    }

    /// True if any announcement contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages
            .lock()
            .iter()
            .any(|(_, content)| content.contains(needle))
    }

    pub fn count_containing(&self, needle: &str) -> usize {
        self.messages
            .lock()
            .iter()
            .filter(|(_, content)| content.contains(needle))
            .count()
    }
}

#[async_trait]
impl Outbound for RecordingOutbound {
    async fn announce(&self, channel: ChannelId, content: String) {
        self.messages.lock().push((channel, content));
    }
}

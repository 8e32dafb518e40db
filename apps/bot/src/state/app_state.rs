use std::sync::Arc;

use crate::config::GameConfig;
use crate::domain::WordList;
use crate::outbound::{NameResolver, Outbound};
use crate::registry::SessionRegistry;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    pub config: GameConfig,
    pub words: Arc<WordList>,
    pub registry: Arc<SessionRegistry>,
    pub outbound: Arc<dyn Outbound>,
    pub names: Arc<dyn NameResolver>,
}

impl AppState {
    pub fn new(
        config: GameConfig,
        words: WordList,
        outbound: Arc<dyn Outbound>,
        names: Arc<dyn NameResolver>,
    ) -> Self {
        Self {
            config,
            words: Arc::new(words),
            registry: Arc::new(SessionRegistry::new()),
            outbound,
            names,
        }
    }
}

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{config::Config, store::TriviaStore};

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn TriviaStore>;

#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Config,
}

impl AppState {
    pub fn new(store: impl TriviaStore, config: Config) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

//! Application state shared across routes

use std::sync::Arc;

use crate::config::Config;
use crate::store::{seed_demo_data, RecordStore};
use crate::util::rate_limit::{create_limiter, Limiter};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: RecordStore,
    pub login_limiter: Arc<Limiter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);

        // Initialize record store
        let store = RecordStore::new();
        if config.seed_demo_data {
            seed_demo_data(&store);
        }

        // Initialize login throttling
        let login_limiter = create_limiter(config.login_rate_limit);

        Self {
            config,
            store,
            login_limiter,
        }
    }
}

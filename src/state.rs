use crate::auth::SessionStore;
use crate::config::Config;
use crate::domain::Catalog;
use crate::loader::{DataCache, DataSource};

/// Shared by every worker thread for the life of the process.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub sessions: SessionStore,
    pub cache: DataCache,
}

impl AppState {
    pub fn new(config: Config, catalog: Catalog, source: Box<dyn DataSource>) -> Self {
        Self {
            config,
            catalog,
            sessions: SessionStore::default(),
            cache: DataCache::new(source),
        }
    }
}

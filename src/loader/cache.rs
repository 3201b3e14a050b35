use crate::auth::token::hash_secret;
use crate::loader::{DataSource, Dataset};
use crate::sources::SourceError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

/// Process-lifetime memo of loaded datasets, keyed by the credential's hash.
/// Only successful loads are kept; nothing is ever evicted.
pub struct DataCache {
    source: Box<dyn DataSource>,
    entries: Mutex<HashMap<[u8; 32], Arc<Dataset>>>,
}

impl DataCache {
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self {
            source,
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<[u8; 32], Arc<Dataset>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_or_load(&self, api_key: &str) -> Result<Arc<Dataset>, SourceError> {
        let key = hash_secret(api_key);
        if let Some(dataset) = self.lock().get(&key) {
            return Ok(Arc::clone(dataset));
        }

        // Loads run outside the lock; a racing load for the same key keeps
        // whichever dataset landed first.
        info!("loading dataset for new credential");
        let dataset = Arc::new(self.source.load(api_key)?);
        Ok(Arc::clone(self.lock().entry(key).or_insert(dataset)))
    }
}

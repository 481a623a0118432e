//! In-memory save store

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::{SaveRecord, SaveStore};
use crate::error::GameResult;

/// Save store backed by a map. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct MemorySaveStore {
    records: Arc<RwLock<BTreeMap<String, SaveRecord>>>,
}

impl MemorySaveStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemorySaveStore {
    async fn save(&self, record: &SaveRecord) -> GameResult<()> {
        let mut records = self.records.write().await;
        records.insert(record.name.clone(), record.clone());
        Ok(())
    }

    async fn load(&self, name: &str) -> GameResult<Option<SaveRecord>> {
        let records = self.records.read().await;
        Ok(records.get(name).cloned())
    }

    async fn delete(&self, name: &str) -> GameResult<bool> {
        let mut records = self.records.write().await;
        Ok(records.remove(name).is_some())
    }

    async fn list(&self) -> GameResult<Vec<String>> {
        let records = self.records.read().await;
        Ok(records.keys().cloned().collect())
    }
}

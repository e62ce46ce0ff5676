//! Process-lifetime in-memory feedback store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::model::{FeedbackId, GradingRecord};
use crate::traits::FeedbackStore;

/// In-memory [`FeedbackStore`]: a `HashMap` behind an async `RwLock`.
///
/// No eviction and no TTL; entries live until process exit.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<FeedbackId, GradingRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn insert(&self, id: FeedbackId, record: GradingRecord) {
        self.records.write().await.insert(id, record);
    }

    async fn get(&self, id: &FeedbackId) -> Option<GradingRecord> {
        self.records.read().await.get(id).cloned()
    }
}

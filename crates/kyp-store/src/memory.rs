//! In-memory record storage.

use async_trait::async_trait;
use kyp_core::Record;
use tokio::sync::RwLock;

use crate::{Error, RecordStore, Result};

/// Catalog held in process memory.
///
/// Insertion order is preserved. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records.
    ///
    /// Later duplicates of an id are dropped.
    pub fn with_records(records: impl IntoIterator<Item = Record>) -> Self {
        let mut seeded: Vec<Record> = Vec::new();
        for record in records {
            if !seeded.iter().any(|r| r.product_id == record.product_id) {
                seeded.push(record);
            }
        }
        Self {
            records: RwLock::new(seeded),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn all_records(&self) -> Result<Vec<Record>> {
        Ok(self.records.read().await.clone())
    }

    async fn get(&self, product_id: &str) -> Result<Option<Record>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .find(|r| r.product_id == product_id)
            .cloned())
    }

    async fn create(&self, record: Record) -> Result<Record> {
        record.validate()?;
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.product_id == record.product_id) {
            return Err(Error::conflict(record.product_id));
        }
        records.push(record.clone());
        tracing::debug!(product_id = %record.product_id, "Record created");
        Ok(record)
    }

    async fn update(&self, record: Record) -> Result<Record> {
        record.validate()?;
        let mut records = self.records.write().await;
        let slot = records
            .iter_mut()
            .find(|r| r.product_id == record.product_id)
            .ok_or_else(|| Error::not_found(record.product_id.clone()))?;
        *slot = record.clone();
        tracing::debug!(product_id = %record.product_id, "Record updated");
        Ok(record)
    }
}

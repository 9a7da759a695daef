//! Storage abstraction.

use async_trait::async_trait;
use kyp_core::Record;

use crate::Result;

/// A product catalog.
///
/// Implementations return complete snapshots from [`all_records`]; callers
/// never page or stream. No consistency is promised across concurrent
/// writers.
///
/// [`all_records`]: RecordStore::all_records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Backend name for logs and health output.
    fn name(&self) -> &str;

    /// Every record, in insertion order.
    async fn all_records(&self) -> Result<Vec<Record>>;

    /// Look up a record by product id.
    async fn get(&self, product_id: &str) -> Result<Option<Record>>;

    /// Insert a new record. Fails with `Conflict` if the id exists.
    async fn create(&self, record: Record) -> Result<Record>;

    /// Replace an existing record. Fails with `NotFound` if the id is absent.
    async fn update(&self, record: Record) -> Result<Record>;
}

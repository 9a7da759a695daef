//! JSON file record storage.
//!
//! The catalog is one JSON array of records. Every read loads the file, so
//! each call sees a fresh snapshot; writes go to a sibling temp file that
//! is renamed over the catalog.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use kyp_core::Record;
use tokio::sync::Mutex;

use crate::{Error, RecordStore, Result};

/// Catalog persisted as a JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Open a store at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }

    async fn load(&self) -> Result<Vec<Record>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| Error::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn save(&self, records: &[Record]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e))?;
        }

        let json = serde_json::to_string_pretty(records).map_err(|source| Error::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| self.io_error(e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), records = records.len(), "Catalog saved");
        Ok(())
    }
}

#[async_trait]
impl RecordStore for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    async fn all_records(&self) -> Result<Vec<Record>> {
        self.load().await
    }

    async fn get(&self, product_id: &str) -> Result<Option<Record>> {
        Ok(self
            .load()
            .await?
            .into_iter()
            .find(|r| r.product_id == product_id))
    }

    async fn create(&self, record: Record) -> Result<Record> {
        record.validate()?;
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        if records.iter().any(|r| r.product_id == record.product_id) {
            return Err(Error::conflict(record.product_id));
        }
        records.push(record.clone());
        self.save(&records).await?;
        Ok(record)
    }

    async fn update(&self, record: Record) -> Result<Record> {
        record.validate()?;
        let _guard = self.write_lock.lock().await;

        let mut records = self.load().await?;
        let slot = records
            .iter_mut()
            .find(|r| r.product_id == record.product_id)
            .ok_or_else(|| Error::not_found(record.product_id.clone()))?;
        *slot = record.clone();
        self.save(&records).await?;
        Ok(record)
    }
}

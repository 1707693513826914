use crate::models::StatusCheckDocument;
use async_trait::async_trait;
use thiserror::Error;

/// MongoDB-backed store used by the running service.
pub mod mongo;

#[cfg(test)]
pub mod memory;

pub use mongo::MongoStatusStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database operation failed: {0}")]
    Database(#[from] mongodb::error::Error),
}

/// Persistence seam for status check documents.
///
/// Implementations own the durable state; callers hold no cache.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatusCheckStore: Send + Sync {
    /// Inserts one document and returns the store's surrogate key as text.
    async fn insert(&self, document: StatusCheckDocument) -> Result<String, StoreError>;

    /// Returns at most `limit` documents in store order.
    async fn find(&self, limit: i64) -> Result<Vec<StatusCheckDocument>, StoreError>;

    /// Deletes the document with the given application id, returning how many were removed.
    async fn delete(&self, id: &str) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

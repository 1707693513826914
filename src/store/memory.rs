use super::{StatusCheckStore, StoreError};
use crate::models::StatusCheckDocument;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process store for route tests; keeps insertion order like an unsorted Mongo scan.
#[derive(Default)]
pub struct MemoryStatusStore {
    documents: RwLock<Vec<StatusCheckDocument>>,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }
}

#[async_trait]
impl StatusCheckStore for MemoryStatusStore {
    async fn insert(&self, document: StatusCheckDocument) -> Result<String, StoreError> {
        let mut documents = self.documents.write().await;
        documents.push(document);
        Ok(format!("{}", documents.len()))
    }

    async fn find(&self, limit: i64) -> Result<Vec<StatusCheckDocument>, StoreError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .take(limit)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|document| document.id == id) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

use super::{StatusCheckStore, StoreError};
use crate::config::AppConfig;
use crate::models::StatusCheckDocument;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, doc};
use mongodb::{Client, Collection, Database};

#[derive(Clone)]
pub struct MongoStatusStore {
    client: Client,
    database: Database,
    collection: Collection<StatusCheckDocument>,
}

impl MongoStatusStore {
    /// Opens the process-wide client described by `config`.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the
    /// first operation rather than here.
    pub async fn connect(config: &AppConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.mongo_url).await?;
        Ok(Self::from_client(client, &config.db_name, &config.collection))
    }

    pub fn from_client(client: Client, db_name: &str, collection_name: &str) -> Self {
        let database = client.database(db_name);
        let collection = database.collection(collection_name);
        Self {
            client,
            database,
            collection,
        }
    }

    pub fn collection_name(&self) -> &str {
        self.collection.name()
    }

    /// Closes pooled connections. Call once, after the HTTP server has stopped.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

#[async_trait]
impl StatusCheckStore for MongoStatusStore {
    async fn insert(&self, document: StatusCheckDocument) -> Result<String, StoreError> {
        let result = self.collection.insert_one(&document).await?;
        Ok(match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        })
    }

    async fn find(&self, limit: i64) -> Result<Vec<StatusCheckDocument>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .projection(doc! { "_id": 0 })
            .limit(limit)
            .await?;
        let documents: Vec<StatusCheckDocument> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn delete(&self, id: &str) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}

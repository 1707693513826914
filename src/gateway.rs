use crate::config::CreatePolicy;
use crate::models::status_check::TimestampError;
use crate::models::{StatusCheck, StatusCheckDocument};
use crate::store::{StatusCheckStore, StoreError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Most records a single list call returns.
pub const LIST_LIMIT: usize = 1000;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("no status check with id {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("stored status check {id} is unreadable: {source}")]
    Decode {
        id: String,
        #[source]
        source: TimestampError,
    },
}

/// # Status Check Gateway
///
/// Moves canonical [`StatusCheck`] records in and out of a
/// [`StatusCheckStore`], converting timestamps between their stored string
/// form and structured UTC datetimes.
///
/// One instance is built at startup and shared by every worker.
#[derive(Clone)]
pub struct StatusCheckGateway {
    store: Arc<dyn StatusCheckStore>,
    policy: CreatePolicy,
}

impl StatusCheckGateway {
    pub fn new(store: Arc<dyn StatusCheckStore>, policy: CreatePolicy) -> Self {
        Self { store, policy }
    }

    /// Persists `record` and hands it back.
    ///
    /// Under [`CreatePolicy::Lenient`] an insert failure is only logged and the
    /// unsaved record is still returned.
    pub async fn create(&self, record: StatusCheck) -> Result<StatusCheck, GatewayError> {
        match self.store.insert(StatusCheckDocument::from(&record)).await {
            Ok(surrogate_key) => {
                info!(id = %record.id, %surrogate_key, "inserted status check");
            }
            Err(err) => match self.policy {
                CreatePolicy::Lenient => {
                    error!(id = %record.id, error = %err, "insert failed, returning unsaved status check");
                }
                CreatePolicy::Strict => {
                    error!(id = %record.id, error = %err, "insert failed");
                    return Err(err.into());
                }
            },
        }

        Ok(record)
    }

    pub async fn list(&self) -> Result<Vec<StatusCheck>, GatewayError> {
        let documents = self.store.find(LIST_LIMIT as i64).await.map_err(|err| {
            error!(error = %err, "listing status checks failed");
            GatewayError::from(err)
        })?;

        documents
            .into_iter()
            .take(LIST_LIMIT)
            .map(|document| {
                let id = document.id.clone();
                StatusCheck::try_from(document).map_err(|source| {
                    warn!(%id, error = %source, "stored status check has a bad timestamp");
                    GatewayError::Decode { id, source }
                })
            })
            .collect()
    }

    /// Removes exactly one record by application id.
    pub async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        match self.store.delete(id).await {
            Ok(0) => Err(GatewayError::NotFound(id.to_string())),
            Ok(_) => {
                info!(%id, "deleted status check");
                Ok(())
            }
            Err(err) => {
                error!(%id, error = %err, "deleting status check failed");
                Err(err.into())
            }
        }
    }

    pub async fn ping(&self) -> Result<(), GatewayError> {
        Ok(self.store.ping().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStatusCheckStore;
    use chrono::{Duration, Utc};
    use mongodb::bson::Bson;
    use tokio_test::{assert_err, assert_ok};

    fn store_failure() -> StoreError {
        StoreError::from(mongodb::error::Error::from(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }

    fn gateway(mock: MockStatusCheckStore, policy: CreatePolicy) -> StatusCheckGateway {
        StatusCheckGateway::new(Arc::new(mock), policy)
    }

    fn stored(id: &str, timestamp: &str) -> StatusCheckDocument {
        StatusCheckDocument {
            id: id.to_string(),
            client_name: format!("client-{}", id),
            timestamp: Bson::String(timestamp.to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_serializes_timestamp_as_string() {
        let record = StatusCheck::new("alice");
        let expected_id = record.id.clone();

        let mut mock = MockStatusCheckStore::new();
        mock.expect_insert()
            .withf(move |document| {
                document.id == expected_id
                    && document.client_name == "alice"
                    && matches!(document.timestamp, Bson::String(_))
            })
            .times(1)
            .returning(|_| Ok("65f0c0ffee".to_string()));

        let created = assert_ok!(gateway(mock, CreatePolicy::Lenient).create(record.clone()).await);
        assert_eq!(created, record);
    }

    #[tokio::test]
    async fn test_lenient_create_swallows_store_failure() {
        let record = StatusCheck::new("alice");

        let mut mock = MockStatusCheckStore::new();
        mock.expect_insert()
            .times(1)
            .returning(|_| Err(store_failure()));

        let created = assert_ok!(gateway(mock, CreatePolicy::Lenient).create(record.clone()).await);
        assert_eq!(created, record);
    }

    #[tokio::test]
    async fn test_strict_create_propagates_store_failure() {
        let mut mock = MockStatusCheckStore::new();
        mock.expect_insert()
            .times(1)
            .returning(|_| Err(store_failure()));

        let err = assert_err!(
            gateway(mock, CreatePolicy::Strict)
                .create(StatusCheck::new("alice"))
                .await
        );
        assert!(matches!(err, GatewayError::Store(_)));
    }

    #[tokio::test]
    async fn test_list_requests_cap_and_parses_timestamps() {
        let mut mock = MockStatusCheckStore::new();
        mock.expect_find()
            .withf(|limit| *limit == 1000)
            .times(1)
            .returning(|_| {
                Ok(vec![
                    stored("a", "2024-01-01T00:00:00.000001+00:00"),
                    stored("b", "2024-01-02T00:00:00"),
                ])
            });

        let records = gateway(mock, CreatePolicy::Lenient).list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "a");
        assert_eq!(records[1].id, "b");
        assert_eq!(
            records[1].timestamp - records[0].timestamp,
            Duration::days(1) - Duration::microseconds(1)
        );
    }

    #[tokio::test]
    async fn test_list_never_exceeds_cap() {
        let mut mock = MockStatusCheckStore::new();
        mock.expect_find().returning(|_| {
            let now = Utc::now().to_rfc3339();
            Ok((0..LIST_LIMIT + 5)
                .map(|i| stored(&i.to_string(), &now))
                .collect())
        });

        let records = gateway(mock, CreatePolicy::Lenient).list().await.unwrap();
        assert_eq!(records.len(), LIST_LIMIT);
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let mut mock = MockStatusCheckStore::new();
        mock.expect_find().returning(|_| Ok(vec![]));

        let records = gateway(mock, CreatePolicy::Lenient).list().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_list_reports_unreadable_timestamp() {
        let mut mock = MockStatusCheckStore::new();
        mock.expect_find()
            .returning(|_| Ok(vec![stored("broken", "not a date")]));

        let err = gateway(mock, CreatePolicy::Lenient).list().await.unwrap_err();
        assert!(matches!(err, GatewayError::Decode { ref id, .. } if id == "broken"));
    }

    #[tokio::test]
    async fn test_delete_found() {
        let mut mock = MockStatusCheckStore::new();
        mock.expect_delete()
            .withf(|id| id == "abc")
            .times(1)
            .returning(|_| Ok(1));

        assert_ok!(gateway(mock, CreatePolicy::Lenient).delete("abc").await);
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let mut mock = MockStatusCheckStore::new();
        mock.expect_delete().returning(|_| Ok(0));

        let err = gateway(mock, CreatePolicy::Lenient)
            .delete("missing")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::NotFound(ref id) if id == "missing"));
    }

    #[tokio::test]
    async fn test_delete_store_failure_is_not_reported_as_not_found() {
        let mut mock = MockStatusCheckStore::new();
        mock.expect_delete().returning(|_| Err(store_failure()));

        let err = gateway(mock, CreatePolicy::Lenient)
            .delete("abc")
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Store(_)));
    }
}

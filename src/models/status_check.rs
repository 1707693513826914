use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, Utc};
use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// A validated status check as handed out by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Builds a fresh record with a random id, stamped with the current time.
    ///
    /// The timestamp is cut to microseconds, the precision it is stored with.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now().trunc_subsecs(6),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

/// Shape of a status check inside the `status_checks` collection.
///
/// `timestamp` is written as an ISO-8601 string. It is kept as raw BSON on the
/// way back in because documents written by other tools may carry a native
/// BSON datetime instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheckDocument {
    pub id: String,
    pub client_name: String,
    pub timestamp: Bson,
}

#[derive(Debug, Error, PartialEq)]
pub enum TimestampError {
    #[error("timestamp {0:?} is not an ISO-8601 datetime")]
    Unparsable(String),
    #[error("timestamp of {0} ms is out of range")]
    OutOfRange(i64),
    #[error("timestamp has unsupported BSON type {0}")]
    UnsupportedType(String),
}

impl From<&StatusCheck> for StatusCheckDocument {
    fn from(record: &StatusCheck) -> Self {
        Self {
            id: record.id.clone(),
            client_name: record.client_name.clone(),
            timestamp: Bson::String(to_iso8601(&record.timestamp)),
        }
    }
}

impl TryFrom<StatusCheckDocument> for StatusCheck {
    type Error = TimestampError;

    fn try_from(document: StatusCheckDocument) -> Result<Self, Self::Error> {
        let timestamp = match document.timestamp {
            Bson::String(raw) => parse_iso8601(&raw)?,
            Bson::DateTime(value) => {
                let millis = value.timestamp_millis();
                DateTime::from_timestamp_millis(millis).ok_or(TimestampError::OutOfRange(millis))?
            }
            other => {
                return Err(TimestampError::UnsupportedType(format!(
                    "{:?}",
                    other.element_type()
                )));
            }
        };

        Ok(Self {
            id: document.id,
            client_name: document.client_name,
            timestamp,
        })
    }
}

/// Renders `2024-03-10T15:30:45.123456+00:00`.
pub fn to_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Accepts offset-qualified ISO-8601 strings and naive ones, which are read as UTC.
pub fn parse_iso8601(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampError::Unparsable(raw.to_string()))
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub id: String,
}

impl DeleteResponse {
    pub fn deleted(id: impl Into<String>) -> Self {
        Self {
            message: "Task deleted successfully".to_string(),
            id: id.into(),
        }
    }
}

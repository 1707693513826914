use actix_web::http::Uri;
use actix_web::http::header::HeaderValue;
use std::env;
use thiserror::Error;

pub const DEFAULT_COLLECTION: &str = "status_checks";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),
    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// What the gateway does when the store rejects an insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatePolicy {
    /// Log the failure and still answer with the record.
    #[default]
    Lenient,
    /// Surface the failure to the caller as a server error.
    Strict,
}

/// # Service Configuration
///
/// Everything the process reads from its environment at startup.
///
/// ## Variables
/// - `MONGO_URL` (required): MongoDB connection string
/// - `DB_NAME` (required): database holding the status collection
/// - `STATUS_COLLECTION`: collection name, defaults to `status_checks`
/// - `CORS_ORIGINS`: comma separated allow-list, defaults to `*`
/// - `HOST` / `PORT`: bind address, defaults to `127.0.0.1:8080`
/// - `STRICT_CREATE`: propagate insert failures instead of swallowing them
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub mongo_url: String,
    pub db_name: String,
    pub collection: String,
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: u16,
    pub create_policy: CreatePolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let mongo_url = required("MONGO_URL")?;
        let db_name = required("DB_NAME")?;
        let collection = lookup("STATUS_COLLECTION")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

        let cors_origins =
            parse_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let create_policy = match lookup("STRICT_CREATE") {
            Some(raw) => match parse_flag(&raw) {
                Some(true) => CreatePolicy::Strict,
                Some(false) => CreatePolicy::Lenient,
                None => {
                    return Err(ConfigError::Invalid {
                        key: "STRICT_CREATE",
                        value: raw,
                    });
                }
            },
            None => CreatePolicy::default(),
        };

        Ok(Self {
            mongo_url,
            db_name,
            collection,
            cors_origins,
            host,
            port,
            create_policy,
        })
    }
}

/// Splits the allow-list; every entry other than `*` must be a valid origin
/// URI usable as a header value.
fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            let valid = origin == "*"
                || (origin.parse::<Uri>().is_ok() && HeaderValue::from_str(origin).is_ok());
            if valid {
                Ok(origin.to_string())
            } else {
                Err(ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: origin.to_string(),
                })
            }
        })
        .collect()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

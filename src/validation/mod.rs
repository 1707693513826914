use crate::models::{StatusCheck, StatusCheckCreate};
use actix_web::error::JsonPayloadError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use utoipa::ToSchema;

/// One rejected input location, e.g. `loc = ["body", "client_name"]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("request validation failed with {} error(s)", errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<&JsonPayloadError> for ValidationError {
    fn from(err: &JsonPayloadError) -> Self {
        let msg = match err {
            JsonPayloadError::ContentType => {
                "Expected a JSON body with content-type application/json".to_string()
            }
            JsonPayloadError::Deserialize(source) => format!("JSON decode error: {}", source),
            other => other.to_string(),
        };
        Self::single(FieldError::new(&["body"], msg, "json_invalid"))
    }
}

/// # Status Check Creation Validator
///
/// Checks a decoded request body for a string `client_name`. Any other keys
/// are ignored.
///
/// ## Errors
/// - `model_attributes_type`: the body is not a JSON object
/// - `missing`: `client_name` is absent
/// - `string_type`: `client_name` is present but not a string (including `null`)
pub fn validate_create(body: &Value) -> Result<StatusCheckCreate, ValidationError> {
    let object = body.as_object().ok_or_else(|| {
        ValidationError::single(FieldError::new(
            &["body"],
            "Input should be a valid dictionary or object to extract fields from",
            "model_attributes_type",
        ))
    })?;

    match object.get("client_name") {
        Some(Value::String(client_name)) => Ok(StatusCheckCreate {
            client_name: client_name.clone(),
        }),
        Some(_) => Err(ValidationError::single(FieldError::new(
            &["body", "client_name"],
            "Input should be a valid string",
            "string_type",
        ))),
        None => Err(ValidationError::single(FieldError::new(
            &["body", "client_name"],
            "Field required",
            "missing",
        ))),
    }
}

/// Validates a creation body and turns it into a canonical record with a
/// fresh id and the current UTC time.
pub fn canonicalize(body: &Value) -> Result<StatusCheck, ValidationError> {
    let request = validate_create(body)?;
    Ok(StatusCheck::new(request.client_name))
}

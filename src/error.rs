use crate::gateway::GatewayError;
use crate::validation::{FieldError, ValidationError};
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Body of 404 and 500 responses.
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Body of 422 responses.
#[derive(Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct ValidationErrorResponse {
    pub detail: Vec<FieldError>,
}

/// # API Errors
///
/// What a route can fail with, mapped onto HTTP responses:
/// - `Validation` → **422** with one entry per rejected field
/// - `NotFound` → **404** `{"detail": "Task not found"}`
/// - `Internal` → **500** `{"detail": "Internal Server Error"}`, cause withheld
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Task not found")]
    NotFound,
    #[error("Internal Server Error")]
    Internal,
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::NotFound(_) => ApiError::NotFound,
            GatewayError::Store(_) | GatewayError::Decode { .. } => ApiError::Internal,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut response = HttpResponse::build(self.status_code());
        match self {
            ApiError::Validation(err) => response.json(ValidationErrorResponse {
                detail: err.errors.clone(),
            }),
            other => response.json(ErrorResponse {
                detail: other.to_string(),
            }),
        }
    }
}

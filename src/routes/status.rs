use crate::error::{ApiError, ErrorResponse, ValidationErrorResponse};
use crate::gateway::StatusCheckGateway;
use crate::models::{DeleteResponse, MessageResponse, StatusCheck, StatusCheckCreate};
use crate::validation::{self, ValidationError};
use actix_web::{HttpResponse, delete, get, post, web};
use serde_json::Value;

/// JSON extractor settings for the status routes.
///
/// A body without a `Content-Type` header is still decoded as JSON.
/// Undecodable bodies and non-JSON content types are answered as 422
/// validation errors, the same as a body with a bad `client_name`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| ApiError::from(ValidationError::from(&err)).into())
}

#[utoipa::path(
    get,
    path = "/api/",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "Status Checks"
)]
#[get("/")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Hello World"))
}

/// # Create Status Check
///
/// Validates the body, assigns a fresh `id` and the current UTC `timestamp`,
/// and stores the record.
///
/// ## Responses
/// - **200 OK**: the canonical record. Returned even when the store rejected
///   the insert, unless the service runs with `STRICT_CREATE=true`
/// - **422 Unprocessable Entity**: missing or non-string `client_name`
/// - **500 Internal Server Error**: insert failed in strict mode
///
/// ## Example Request
/// ```json
/// { "client_name": "alice" }
/// ```
#[utoipa::path(
    post,
    path = "/api/status",
    request_body = StatusCheckCreate,
    responses(
        (status = 200, description = "Status check created", body = StatusCheck),
        (status = 422, description = "Invalid request body", body = ValidationErrorResponse),
        (status = 500, description = "Insert failed (strict mode only)", body = ErrorResponse)
    ),
    tag = "Status Checks"
)]
#[post("/status")]
pub async fn create_status_check(
    body: web::Json<Value>,
    gateway: web::Data<StatusCheckGateway>,
) -> Result<HttpResponse, ApiError> {
    let record = validation::canonicalize(&body)?;
    let record = gateway.create(record).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// # List Status Checks
///
/// Returns up to 1000 records in store order, which is not guaranteed to be
/// insertion order.
#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Stored status checks", body = [StatusCheck]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Status Checks"
)]
#[get("/status")]
pub async fn list_status_checks(
    gateway: web::Data<StatusCheckGateway>,
) -> Result<HttpResponse, ApiError> {
    let records = gateway.list().await?;
    Ok(HttpResponse::Ok().json(records))
}

#[utoipa::path(
    delete,
    path = "/api/status/{id}",
    params(
        ("id" = String, Path, description = "Application id of the status check")
    ),
    responses(
        (status = 200, description = "Status check deleted", body = DeleteResponse),
        (status = 404, description = "No status check with this id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "Status Checks"
)]
#[delete("/status/{id}")]
pub async fn delete_status_check(
    id: web::Path<String>,
    gateway: web::Data<StatusCheckGateway>,
) -> Result<HttpResponse, ApiError> {
    let id = id.into_inner();
    gateway.delete(&id).await?;
    Ok(HttpResponse::Ok().json(DeleteResponse::deleted(id)))
}

/// # Route Configuration
///
/// - `GET /`: greeting
/// - `POST /status`: create
/// - `GET /status`: list
/// - `DELETE /status/{id}`: delete
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(hello)
        .service(create_status_check)
        .service(list_status_checks)
        .service(delete_status_check);
}

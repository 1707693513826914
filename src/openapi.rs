use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// route handlers and served by Swagger UI.
///
/// # Endpoints
/// - `GET /` and `GET /api/`: greetings
/// - `GET /api/health`: store reachability
/// - `POST /api/status`, `GET /api/status`, `DELETE /api/status/{id}`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index,
        crate::routes::health::health,
        crate::routes::status::hello,
        crate::routes::status::create_status_check,
        crate::routes::status::list_status_checks,
        crate::routes::status::delete_status_check,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::status_check::StatusCheck,
            crate::models::status_check::StatusCheckCreate,
            crate::models::status_check::MessageResponse,
            crate::models::status_check::DeleteResponse,
            crate::error::ErrorResponse,
            crate::error::ValidationErrorResponse,
            crate::validation::FieldError
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Status Checks", description = "Create, list and delete status check records")
    ),
    info(
        description = "Timestamped status check records backed by MongoDB",
        title = "Status Check API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

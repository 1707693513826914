use crate::models::MessageResponse;
use actix_web::{HttpResponse, get, web};

/// # Health Check Endpoint
///
/// `GET /api/health` answers "UP" with 200 when the document store responds
/// to a ping and "DOWN" with 503 otherwise.
pub mod health;

/// # Status Check Endpoints
///
/// Create, list and delete status check records.
///
/// ## Responses
/// - **200 OK**: success
/// - **404 Not Found**: delete target does not exist
/// - **422 Unprocessable Entity**: invalid creation body
/// - **500 Internal Server Error**: document store failure
pub mod status;


/// Liveness message outside the API scope.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Backend is up", body = MessageResponse)
    ),
    tag = "Health Check"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("Backend is running successfully"))
}

/// # API Route Configuration
///
/// Mounts every endpoint under the `/api` base path, plus the bare `/`
/// liveness message. `GET /api` redirects to `/api/`.
///
/// ## Example Endpoints
///
/// ```text
/// GET    /api/             - Greeting
/// GET    /api/health       - Store reachability
/// POST   /api/status       - Create a status check
/// GET    /api/status       - List status checks
/// DELETE /api/status/{id}  - Delete a status check
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::redirect("/api", "/api/"))
        .service(
            web::scope("/api")
                .app_data(status::json_config())
                .configure(health::configure_routes)
                .configure(status::configure_routes),
        )
        .service(index);
}

use crate::gateway::StatusCheckGateway;
use crate::models::HealthResponse;
use actix_web::{HttpResponse, Responder, get, web};
use tracing::warn;

/// # Health Check Endpoint
///
/// Pings the document store.
///
/// ## Response
///
/// - **200 OK**: store reachable, `status` is "UP"
/// - **503 Service Unavailable**: ping failed, `status` is "DOWN"
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "timestamp": "2023-10-05T12:34:56.789+00:00"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Store reachable", body = HealthResponse),
        (status = 503, description = "Store unreachable", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(gateway: web::Data<StatusCheckGateway>) -> impl Responder {
    match gateway.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::up()),
        Err(err) => {
            warn!(error = %err, "health check could not reach the store");
            HttpResponse::ServiceUnavailable().json(HealthResponse::down())
        }
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CreatePolicy;
    use crate::store::memory::MemoryStatusStore;
    use crate::store::{MockStatusCheckStore, StoreError};
    use actix_web::{App, test};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_health_endpoint_up() {
        let gateway = StatusCheckGateway::new(
            Arc::new(MemoryStatusStore::new()),
            CreatePolicy::Lenient,
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(gateway))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let health_response: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(health_response.status, "UP");
        assert!(!health_response.timestamp.is_empty());
    }

    #[actix_web::test]
    async fn test_health_endpoint_down() {
        let mut mock = MockStatusCheckStore::new();
        mock.expect_ping().returning(|| {
            Err(StoreError::from(mongodb::error::Error::from(
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
            )))
        });
        let gateway = StatusCheckGateway::new(Arc::new(mock), CreatePolicy::Lenient);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(gateway))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);

        let health_response: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(health_response.status, "DOWN");
    }
}

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web::Data};
use status_checks::config::AppConfig;
use status_checks::cors::cors_policy;
use status_checks::gateway::StatusCheckGateway;
use status_checks::logging::init_tracing;
use status_checks::openapi::ApiDoc;
use status_checks::store::MongoStatusStore;
use std::io;
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Status Check Service Entry Point
///
/// Loads configuration from the environment (and `.env` if present), opens
/// the MongoDB client once, serves the API until shutdown, then closes the
/// client.
///
/// # Endpoints
/// - REST API: `/api/...` (configured in routes)
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let config =
        AppConfig::from_env().map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let store = MongoStatusStore::connect(&config)
        .await
        .map_err(io::Error::other)?;
    let gateway = Data::new(StatusCheckGateway::new(
        Arc::new(store.clone()),
        config.create_policy,
    ));

    info!(
        host = %config.host,
        port = config.port,
        database = %config.db_name,
        collection = %store.collection_name(),
        policy = ?config.create_policy,
        "starting status check service"
    );

    let origins = config.cors_origins.clone();
    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .wrap(cors_policy(&origins))
            .app_data(gateway.clone())
            .configure(status_checks::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    info!("server stopped, closing MongoDB client");
    store.shutdown().await;
    Ok(())
}

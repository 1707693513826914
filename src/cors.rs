use actix_cors::Cors;

/// Cross-origin policy for the API.
///
/// `origins` is the configured allow-list; a `*` entry admits every origin.
/// Methods and headers are unrestricted and credentials are allowed.
pub fn cors_policy(origins: &[String]) -> Cors {
    let cors = if origins.iter().any(|origin| origin == "*") {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors.allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(600)
}

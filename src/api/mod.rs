pub mod health;
pub mod swagger;
pub mod users;

use actix_web::{error::InternalError, error::JsonPayloadError, web, HttpResponse};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::models::ErrorResponse;

/// Registers every route plus the JSON extractor config.
///
/// The store must already be registered as `web::Data<dyn UserStore>`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}")
                .url("/api-docs/openapi.json", swagger::ApiDoc::openapi()),
        )
        .route("/", web::get().to(health::index))
        .route("/health", web::get().to(health::health_check))
        .route("/users", web::get().to(users::get_users))
        .route("/user", web::post().to(users::create_user))
        .route("/user/{name}", web::put().to(users::update_user))
        .route("/user/{name}", web::delete().to(users::delete_user));
}

/// Any body that fails to deserialize is a client error, never a 500.
/// Bodies over the size limit get 413 instead of 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        log::warn!("⚠️  Invalid JSON on {} {}: {}", req.method(), req.path(), err);
        let response = match err {
            JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                HttpResponse::PayloadTooLarge().json(ErrorResponse::new("Request body too large"))
            }
            _ => HttpResponse::BadRequest().json(ErrorResponse::new("Invalid JSON")),
        };
        InternalError::from_response(err, response).into()
    })
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Route not found"))
}

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::UserStore;
use crate::models::MessageResponse;
use crate::utils::Deadline;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: i64,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        HealthResponse {
            status: status.to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    )
)]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse {
        message: "🚀 Actix + MongoDB API running".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and store are healthy", body = HealthResponse),
        (status = 503, description = "Store did not answer the ping", body = HealthResponse)
    )
)]
pub async fn health_check(store: web::Data<dyn UserStore>) -> impl Responder {
    match store.ping(Deadline::for_request()).await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse::new("healthy")),
        Err(e) => {
            log::warn!("⚠️  Health check failed: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse::new("unhealthy"))
        }
    }
}

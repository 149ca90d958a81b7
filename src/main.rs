mod api;
mod config;
mod database;
mod models;
mod utils;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};

use crate::database::{MongoDB, UserStore};
use crate::utils::SHUTDOWN_TIMEOUT;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables (antes do logger, para respeitar RUST_LOG do .env)
    let env_file = config::load_env_file();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    match env_file {
        Some(path) => log::info!("✅ .env loaded from: {}", path),
        None => log::info!("ℹ️  No .env file found, using process environment"),
    }

    let settings = match config::Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    log::info!("🚀 Starting User Service...");

    let db = match MongoDB::connect(&settings).await {
        Ok(db) => db,
        Err(e) => {
            log::error!("❌ MongoDB connection failed: {}", e);
            std::process::exit(1);
        }
    };

    let store: Arc<dyn UserStore> = Arc::new(db.clone());
    let store_data = web::Data::from(store);

    log::info!("🌐 Server starting on {}:{}", settings.host, settings.port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", settings.host, settings.port);

    // SIGINT/SIGTERM: para de aceitar conexões e drena as requisições em andamento
    let result = HttpServer::new(move || {
        App::new()
            .app_data(store_data.clone())
            .wrap(Logger::default())
            .configure(api::configure)
            .default_service(web::to(api::not_found))
    })
    .shutdown_timeout(SHUTDOWN_TIMEOUT.as_secs())
    .bind((settings.host.as_str(), settings.port))?
    .run()
    .await;

    log::info!("🛑 Shutting down server...");
    if let Err(e) = &result {
        log::error!("❌ Server error: {}", e);
    }

    db.disconnect().await;

    log::info!("✅ Server stopped gracefully");
    result
}

use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{middleware, web, App, HttpServer};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use moodtune_api::config::Settings;
use moodtune_api::handle_json_payload_error;
use moodtune_api::routes::{self, moods::AppState};
use moodtune_api::services::{FaceAnalysisClient, GeminiClient};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    // Initialize logging; LOG_LEVEL / LOG_FORMAT env vars override the config file
    let log_level =
        std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting MoodTune analysis service...");
    info!("Configuration loaded successfully");

    if settings.gemini.api_key.is_empty() {
        // Missing credential surfaces on first use, not at startup
        tracing::warn!("Gemini API key is not configured; recommendation requests will fail");
    }

    // Initialize face analysis client
    let face = Arc::new(FaceAnalysisClient::new(
        settings.face.endpoint.clone(),
        settings.face.detector_backend.clone(),
        settings.face.timeout_secs.unwrap_or(30),
    ));

    info!("Face analysis client initialized ({})", settings.face.endpoint);

    // Initialize Gemini client
    let gemini = Arc::new(GeminiClient::new(
        settings.gemini.endpoint.clone(),
        settings.gemini.api_key.clone(),
        settings.gemini.model.clone(),
        settings.gemini.timeout_secs.unwrap_or(60),
    ));

    info!("Gemini client initialized (model: {})", settings.gemini.model);

    // Build application state
    let app_state = AppState { face, gemini };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);
    let max_upload_bytes = settings.upload.max_bytes;

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(max_upload_bytes)
                    .memory_limit(max_upload_bytes),
            )
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}

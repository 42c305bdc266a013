use actix_multipart::form::{bytes::Bytes as UploadBytes, MultipartForm};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{intake, prompt};
use crate::models::{
    AnalyzeResponse, HealthResponse, RecommendRequest, RecommendResponse, SoftErrorResponse,
};
use crate::services::{FaceAnalysisClient, GeminiClient};

/// Application state shared across all handlers
///
/// Both clients are constructed once at startup and read-only afterwards;
/// handlers hold no other state between requests.
#[derive(Clone)]
pub struct AppState {
    pub face: Arc<FaceAnalysisClient>,
    pub gemini: Arc<GeminiClient>,
}

/// Configure all mood-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/analyze", web::post().to(analyze))
        .route("/ai-recommend", web::post().to(ai_recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Multipart form for the analyze endpoint: a single uploaded file
#[derive(MultipartForm)]
struct AnalyzeUpload {
    file: UploadBytes,
}

/// Analyze endpoint
///
/// POST /analyze
///
/// Multipart body with a single `file` field containing the photo. On
/// success returns `{"dominant_emotion": ..., "emotions": {...}}`. Any
/// decode or classification failure is returned as `{"error": ...}` with
/// HTTP 200; callers inspect the body rather than the status code.
async fn analyze(
    state: web::Data<AppState>,
    form: MultipartForm<AnalyzeUpload>,
) -> impl Responder {
    tracing::info!("Analyzing uploaded image ({} bytes)", form.file.data.len());

    let classification = match intake::decode_image(&form.file.data) {
        Ok(frame) => state
            .face
            .classify(&frame)
            .await
            .map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match classification {
        Ok(result) => {
            tracing::info!("Dominant emotion: {}", result.dominant_emotion);
            HttpResponse::Ok().json(AnalyzeResponse::from(result))
        }
        Err(message) => {
            tracing::error!("Analyze error: {}", message);
            HttpResponse::Ok().json(SoftErrorResponse { error: message })
        }
    }
}

/// Song recommendation endpoint
///
/// POST /ai-recommend
///
/// Request body:
/// ```json
/// {
///   "mood_description": "string"
/// }
/// ```
///
/// Returns the generator's raw text under `suggested_songs`, or
/// `{"error": ...}` with HTTP 200 on any failure.
async fn ai_recommend(
    state: web::Data<AppState>,
    req: web::Json<RecommendRequest>,
) -> impl Responder {
    let song_prompt = prompt::build_song_prompt(&req.mood_description);

    tracing::info!(
        "Requesting song recommendations for mood ({} chars)",
        req.mood_description.len()
    );

    match state.gemini.generate_content(&song_prompt).await {
        Ok(text) => HttpResponse::Ok().json(RecommendResponse {
            suggested_songs: text,
        }),
        Err(e) => {
            tracing::error!("Recommendation error: {}", e);
            HttpResponse::Ok().json(SoftErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

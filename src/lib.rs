//! MoodTune API - emotion analysis and song recommendation service
//!
//! Thin HTTP backend for the MoodTune app: uploaded photos are relayed to a
//! facial emotion analysis service, mood descriptions to the Gemini API,
//! and each upstream's reshaped output is returned to the caller. Both
//! endpoints are stateless; nothing is persisted between requests.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use crate::core::{build_song_prompt, decode_image, reshape_emotions};
pub use models::{AnalyzeResponse, EmotionResult, RecommendRequest, RecommendResponse};

use actix_web::{error, http::StatusCode, HttpResponse};

/// JSON error response for JSON payload errors
#[derive(Debug, serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl std::fmt::Display for JsonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for JsonError {}

impl error::ResponseError for JsonError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST))
            .content_type("application/json")
            .body(serde_json::to_string(self).unwrap())
    }
}

/// Handle JSON payload errors
///
/// Malformed request bodies never reach a handler, so they sit outside the
/// soft-error contract and return a structured 400 instead.
pub fn handle_json_payload_error(
    err: error::JsonPayloadError,
    req: &actix_web::HttpRequest,
) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    JsonError {
        error: "invalid_json".to_string(),
        message: format!("Invalid JSON: {}", err),
        status_code: 400,
    }
    .into()
}

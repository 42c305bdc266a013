use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::domain::EmotionResult;

/// Response for the analyze endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub dominant_emotion: String,
    pub emotions: HashMap<String, f64>,
}

impl From<EmotionResult> for AnalyzeResponse {
    fn from(result: EmotionResult) -> Self {
        Self {
            dominant_emotion: result.dominant_emotion,
            emotions: result.emotions,
        }
    }
}

/// Response for the recommend endpoint
///
/// `suggested_songs` is the generator's raw text block; the server does not
/// parse it into individual song records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub suggested_songs: String,
}

/// Soft error body returned with HTTP 200
///
/// Existing clients inspect the body for an `error` key instead of
/// branching on status codes, so adapter failures keep a 200 status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

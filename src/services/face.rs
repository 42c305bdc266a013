use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::DynamicImage;
use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::core::{emotion, intake};
use crate::models::EmotionResult;

/// Errors that can occur when interacting with the face analysis service
#[derive(Debug, Error)]
pub enum FaceAnalysisError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("analysis service returned error: {0}")]
    ApiError(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    #[error("could not prepare frame for analysis: {0}")]
    Encode(#[from] intake::IntakeError),

    #[error(transparent)]
    Reshape(#[from] emotion::EmotionReshapeError),
}

/// Client for the facial emotion analysis service
///
/// The service exposes the analysis library's REST serving mode: a single
/// `POST /analyze` accepting a frame plus the detection options the library
/// takes in-process. Detection is never enforced, so a frame without a
/// recognizable face still yields a whole-frame classification.
pub struct FaceAnalysisClient {
    base_url: String,
    detector_backend: String,
    client: Client,
}

/// Per-face reading in the service's response
#[derive(Debug, serde::Deserialize)]
struct FaceReading {
    #[serde(default)]
    dominant_emotion: Option<String>,
    #[serde(default)]
    emotion: HashMap<String, Value>,
}

impl FaceAnalysisClient {
    /// Create a new face analysis client
    pub fn new(base_url: String, detector_backend: String, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            detector_backend,
            client,
        }
    }

    /// Classify the emotions of the most prominent face in a decoded frame.
    pub async fn classify(&self, frame: &DynamicImage) -> Result<EmotionResult, FaceAnalysisError> {
        let jpeg = intake::encode_jpeg(frame)?;
        let data_uri = format!("data:image/jpeg;base64,{}", STANDARD.encode(&jpeg));

        let url = format!("{}/analyze", self.base_url.trim_end_matches('/'));
        let payload = json!({
            "img_path": data_uri,
            "actions": ["emotion"],
            "detector_backend": self.detector_backend,
            "enforce_detection": false,
        });

        tracing::debug!(
            "Submitting frame for emotion analysis ({}x{}, {} bytes as JPEG)",
            frame.width(),
            frame.height(),
            jpeg.len()
        );

        let response = self.client.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Face analysis request failed: {} - {}", status, body);
            return Err(FaceAnalysisError::ApiError(format!(
                "analysis request failed: {}",
                status
            )));
        }

        let body: Value = response.json().await?;

        let results = body
            .get("results")
            .and_then(|r| r.as_array())
            .ok_or_else(|| FaceAnalysisError::InvalidResponse("missing results array".into()))?;

        // The most prominent face is listed first; additional faces are ignored.
        let reading = results
            .first()
            .cloned()
            .ok_or_else(|| FaceAnalysisError::InvalidResponse("no classification in response".into()))?;

        let reading: FaceReading = serde_json::from_value(reading)
            .map_err(|e| FaceAnalysisError::InvalidResponse(format!("failed to parse reading: {}", e)))?;

        let result = emotion::reshape_emotions(reading.dominant_emotion.as_deref(), &reading.emotion)?;

        tracing::debug!("Classified frame as '{}'", result.dominant_emotion);

        Ok(result)
    }
}

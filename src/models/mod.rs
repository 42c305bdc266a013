// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{EmotionResult, EMOTION_LABELS};
pub use requests::RecommendRequest;
pub use responses::{AnalyzeResponse, HealthResponse, RecommendResponse, SoftErrorResponse};

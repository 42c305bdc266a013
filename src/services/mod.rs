// Service exports
pub mod face;
pub mod gemini;

pub use face::{FaceAnalysisClient, FaceAnalysisError};
pub use gemini::{GeminiClient, GeminiError};

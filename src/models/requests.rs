use serde::{Deserialize, Serialize};

/// Request for song recommendations from a mood description
///
/// Only presence and shape are checked (by the JSON deserializer); the
/// description itself is free text and may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub mood_description: String,
}

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Emotion categories the analysis service classifies over.
pub const EMOTION_LABELS: [&str; 7] = [
    "angry", "disgust", "fear", "happy", "sad", "surprise", "neutral",
];

/// Classification result for a single analyzed frame
///
/// Built from the analysis service's output as early as possible so the
/// rest of the system never touches the upstream's loosely-typed payload.
/// Labels are lowercase and trimmed; scores are passed through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionResult {
    pub dominant_emotion: String,
    pub emotions: HashMap<String, f64>,
}

impl EmotionResult {
    /// Score for a single label, if the classifier reported it
    pub fn score(&self, label: &str) -> Option<f64> {
        self.emotions.get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_lookup() {
        let mut emotions = HashMap::new();
        emotions.insert("happy".to_string(), 91.2);
        emotions.insert("neutral".to_string(), 4.1);

        let result = EmotionResult {
            dominant_emotion: "happy".to_string(),
            emotions,
        };

        assert_eq!(result.score("happy"), Some(91.2));
        assert_eq!(result.score("fear"), None);
    }

    #[test]
    fn test_label_set_is_fixed() {
        assert_eq!(EMOTION_LABELS.len(), 7);
        assert!(EMOTION_LABELS.contains(&"happy"));
        assert!(EMOTION_LABELS.iter().all(|l| l.chars().all(|c| c.is_ascii_lowercase())));
    }
}

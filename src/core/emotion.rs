use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::EmotionResult;

/// Errors that can occur while reshaping classifier output
#[derive(Debug, Error)]
pub enum EmotionReshapeError {
    #[error("no emotion scores in classifier output")]
    EmptyScores,

    #[error("non-numeric confidence for '{0}'")]
    NonNumericScore(String),
}

/// Map the classifier's loosely-typed output into a fixed-shape record.
///
/// Labels are trimmed and lowercased, confidence values coerced to f64.
/// No calibration or thresholding is applied; scores pass through in
/// whatever range the classifier reports them. The upstream's own dominant
/// label wins when present; otherwise the highest-scoring label is used.
pub fn reshape_emotions(
    dominant: Option<&str>,
    raw_scores: &HashMap<String, Value>,
) -> Result<EmotionResult, EmotionReshapeError> {
    if raw_scores.is_empty() {
        return Err(EmotionReshapeError::EmptyScores);
    }

    let mut emotions = HashMap::with_capacity(raw_scores.len());
    for (label, value) in raw_scores {
        let score = value
            .as_f64()
            .ok_or_else(|| EmotionReshapeError::NonNumericScore(label.clone()))?;
        emotions.insert(label.trim().to_lowercase(), score);
    }

    let dominant_emotion = match dominant.map(str::trim).filter(|d| !d.is_empty()) {
        Some(label) => label.to_lowercase(),
        None => emotions
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(label, _)| label.clone())
            .ok_or(EmotionReshapeError::EmptyScores)?,
    };

    Ok(EmotionResult {
        dominant_emotion,
        emotions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(entries: &[(&str, Value)]) -> HashMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_labels_lowercased_and_trimmed() {
        let scores = raw(&[(" Happy ", json!(91.4)), ("NEUTRAL", json!(4.2))]);

        let result = reshape_emotions(Some(" Happy "), &scores).unwrap();

        assert_eq!(result.dominant_emotion, "happy");
        assert_eq!(result.score("happy"), Some(91.4));
        assert_eq!(result.score("neutral"), Some(4.2));
    }

    #[test]
    fn test_integer_scores_coerced_to_float() {
        let scores = raw(&[("sad", json!(73)), ("fear", json!(2))]);

        let result = reshape_emotions(Some("sad"), &scores).unwrap();

        assert_eq!(result.score("sad"), Some(73.0));
    }

    #[test]
    fn test_dominant_computed_when_upstream_omits_it() {
        let scores = raw(&[
            ("angry", json!(12.0)),
            ("surprise", json!(80.5)),
            ("neutral", json!(7.5)),
        ]);

        let result = reshape_emotions(None, &scores).unwrap();

        assert_eq!(result.dominant_emotion, "surprise");
    }

    #[test]
    fn test_blank_dominant_falls_back_to_scores() {
        let scores = raw(&[("happy", json!(60.0)), ("sad", json!(40.0))]);

        let result = reshape_emotions(Some("   "), &scores).unwrap();

        assert_eq!(result.dominant_emotion, "happy");
    }

    #[test]
    fn test_non_numeric_score_is_an_error() {
        let scores = raw(&[("happy", json!("ninety"))]);

        let err = reshape_emotions(Some("happy"), &scores).unwrap_err();

        assert!(matches!(err, EmotionReshapeError::NonNumericScore(_)));
    }

    #[test]
    fn test_empty_scores_is_an_error() {
        let err = reshape_emotions(Some("happy"), &HashMap::new()).unwrap_err();

        assert!(matches!(err, EmotionReshapeError::EmptyScores));
    }
}

//! Scoring results.

use common::SessionId;
use serde::Serialize;

use crate::error::InferenceError;

/// A practice score, guaranteed finite and within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Result<Self, InferenceError> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(InferenceError::ScoreOutOfRange(value))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The response returned for a scored practice session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PracticeResponse {
    pub session_id: SessionId,
    pub score: Score,
    pub feedback: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_accepts_bounds() {
        assert_eq!(Score::new(0.0).unwrap().value(), 0.0);
        assert_eq!(Score::new(100.0).unwrap().value(), 100.0);
        assert_eq!(Score::new(73.5).unwrap().value(), 73.5);
    }

    #[test]
    fn score_rejects_out_of_range_and_nan() {
        assert!(matches!(
            Score::new(-0.5),
            Err(InferenceError::ScoreOutOfRange(_))
        ));
        assert!(Score::new(100.01).is_err());
        assert!(Score::new(f64::NAN).is_err());
        assert!(Score::new(f64::INFINITY).is_err());
    }

    #[test]
    fn response_serializes_flat() {
        let response = PracticeResponse {
            session_id: SessionId::new(),
            score: Score::new(73.5).unwrap(),
            feedback: "ok".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["score"], 73.5);
        assert_eq!(json["feedback"], "ok");
        assert_eq!(json["session_id"], response.session_id.to_string());
    }
}

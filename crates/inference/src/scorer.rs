//! Scoring backends.

use async_trait::async_trait;

use crate::error::InferenceError;
use crate::practice::{PracticeRequest, Score};

/// Score returned by [`MockScorer`] for every submission.
pub const MOCK_SCORE: f64 = 73.5;

/// Feedback returned by [`MockScorer`] for every submission.
pub const MOCK_FEEDBACK: &str = "Mock feedback: inference pipeline not yet wired.";

/// The outcome of scoring one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub score: Score,
    pub feedback: String,
}

/// Trait for practice scoring backends.
///
/// Implementations receive an already validated request.
#[async_trait]
pub trait PracticeScorer: Send + Sync {
    /// Scores a single practice submission.
    async fn score(&self, request: &PracticeRequest) -> Result<Assessment, InferenceError>;
}

/// Placeholder scorer that ignores the submitted frames.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockScorer;

impl MockScorer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PracticeScorer for MockScorer {
    async fn score(&self, _request: &PracticeRequest) -> Result<Assessment, InferenceError> {
        Ok(Assessment {
            score: Score::new(MOCK_SCORE)?,
            feedback: MOCK_FEEDBACK.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use common::UserId;

    use super::*;
    use crate::practice::{PracticeFrame, PracticeMode};

    fn request(mode: PracticeMode, frames: usize) -> PracticeRequest {
        PracticeRequest {
            user_id: UserId::from_uuid(uuid::Uuid::new_v4()),
            lesson_id: None,
            mode,
            frames: (0..frames as u64)
                .map(|t| PracticeFrame {
                    timestamp_ms: t * 33,
                    keypoints: vec![vec![t as f64, 0.5]],
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn mock_scorer_is_constant() {
        let scorer = MockScorer::new();
        let a = scorer.score(&request(PracticeMode::Word, 1)).await.unwrap();
        let b = scorer
            .score(&request(PracticeMode::Freestyle, 900))
            .await
            .unwrap();

        assert_eq!(a, b);
        assert_eq!(a.score.value(), MOCK_SCORE);
        assert_eq!(a.feedback, MOCK_FEEDBACK);
    }
}

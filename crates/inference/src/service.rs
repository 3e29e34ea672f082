//! Inference service wrapping a scoring backend.

use common::SessionId;

use crate::error::InferenceError;
use crate::practice::{PracticeRequest, PracticeResponse, UncheckedPracticeRequest};
use crate::scorer::{MockScorer, PracticeScorer};

/// Service for scoring practice submissions.
///
/// Owns the scoring backend and mints a fresh session ID for every scored
/// submission. Holds no mutable state, so a single instance can be shared
/// across concurrent requests.
pub struct InferenceService<S: PracticeScorer> {
    scorer: S,
}

impl InferenceService<MockScorer> {
    /// Creates a service backed by the placeholder scorer.
    pub fn mock() -> Self {
        Self::new(MockScorer::new())
    }
}

impl<S: PracticeScorer> InferenceService<S> {
    /// Creates a new inference service with the given scorer.
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Validates a raw submission and scores it.
    #[tracing::instrument(skip_all)]
    pub async fn submit(
        &self,
        unchecked: UncheckedPracticeRequest,
    ) -> Result<PracticeResponse, InferenceError> {
        let request = match unchecked.validate() {
            Ok(request) => request,
            Err(errors) => {
                metrics::counter!("practice_submissions_rejected_total", "reason" => "validation")
                    .increment(1);
                tracing::debug!(violations = errors.len(), "practice submission rejected");
                return Err(errors.into());
            }
        };
        self.score(&request).await
    }

    /// Scores an already validated submission.
    #[tracing::instrument(
        skip(self, request),
        fields(user_id = %request.user_id, mode = %request.mode, frames = request.frames.len())
    )]
    pub async fn score(
        &self,
        request: &PracticeRequest,
    ) -> Result<PracticeResponse, InferenceError> {
        let assessment = self.scorer.score(request).await?;
        let session_id = SessionId::new();

        metrics::counter!("practice_submissions_total", "mode" => request.mode.as_str())
            .increment(1);
        tracing::debug!(%session_id, score = %assessment.score, "practice submission scored");

        Ok(PracticeResponse {
            session_id,
            score: assessment.score,
            feedback: assessment.feedback,
        })
    }
}

//! Inference error types.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Errors that can occur while scoring a practice submission.
#[derive(Debug, Error)]
pub enum InferenceError {
    /// The submission failed schema validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// A scorer produced a score outside `[0, 100]` or a non-finite value.
    #[error("Score out of range: {0} (must be within 0..=100)")]
    ScoreOutOfRange(f64),

    /// The scoring backend failed.
    #[error("Scorer error: {0}")]
    Scorer(String),
}

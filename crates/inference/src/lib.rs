//! Practice scoring core.
//!
//! This crate provides:
//! - The practice submission model (`PracticeRequest`, `PracticeFrame`, `PracticeMode`)
//! - Explicit per-field validation of unchecked wire payloads
//! - The `PracticeScorer` seam and the placeholder `MockScorer`
//! - `InferenceService`, which turns a validated request into a `PracticeResponse`

pub mod error;
pub mod practice;
pub mod scorer;
pub mod service;
pub mod validation;

pub use error::InferenceError;
pub use practice::{
    MAX_FRAMES, PracticeFrame, PracticeMode, PracticeRequest, PracticeResponse, Score,
    UncheckedPracticeFrame, UncheckedPracticeRequest,
};
pub use scorer::{Assessment, MOCK_FEEDBACK, MOCK_SCORE, MockScorer, PracticeScorer};
pub use service::InferenceService;
pub use validation::{ValidationErrors, Violation};

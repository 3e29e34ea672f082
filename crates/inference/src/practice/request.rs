//! Practice requests, as received and as validated.

use common::{LessonId, UserId};
use serde::Deserialize;

use super::PracticeMode;
use crate::validation::{
    ValidationErrors, validate_frame_count, validate_keypoints, validate_lesson_id,
    validate_mode, validate_timestamp, validate_user_id,
};

/// Minimum number of frames in a submission.
pub const MIN_FRAMES: usize = 1;

/// Maximum number of frames in a submission.
pub const MAX_FRAMES: usize = 1200;

/// A frame exactly as it arrives on the wire, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct UncheckedPracticeFrame {
    /// Wide enough for any JSON integer in the `u64` range and below zero.
    pub timestamp_ms: i128,
    pub keypoints: Vec<Vec<f64>>,
}

/// A practice submission exactly as it arrives on the wire, before validation.
///
/// Identifiers and mode are kept as strings so that malformed values surface
/// as field violations rather than opaque decoding failures.
#[derive(Debug, Clone, Deserialize)]
pub struct UncheckedPracticeRequest {
    pub user_id: String,
    #[serde(default)]
    pub lesson_id: Option<String>,
    pub mode: String,
    pub frames: Vec<UncheckedPracticeFrame>,
}

/// One captured frame of keypoints.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeFrame {
    /// Capture time in milliseconds.
    pub timestamp_ms: u64,
    /// Keypoint rows; never empty.
    pub keypoints: Vec<Vec<f64>>,
}

/// A validated practice submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PracticeRequest {
    pub user_id: UserId,
    pub lesson_id: Option<LessonId>,
    pub mode: PracticeMode,
    /// Between [`MIN_FRAMES`] and [`MAX_FRAMES`] frames.
    pub frames: Vec<PracticeFrame>,
}

impl UncheckedPracticeRequest {
    /// Validates every field, collecting all violations.
    ///
    /// Succeeds only if no field is in violation.
    pub fn validate(self) -> Result<PracticeRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let user_id = errors.check(validate_user_id(&self.user_id));
        let lesson_id = errors.check(validate_lesson_id(self.lesson_id.as_deref()));
        let mode = errors.check(validate_mode(&self.mode));
        errors.check(validate_frame_count(self.frames.len()));

        let mut frames = Vec::with_capacity(self.frames.len().min(MAX_FRAMES));
        for (index, frame) in self.frames.into_iter().enumerate() {
            let timestamp_ms = errors.check(validate_timestamp(index, frame.timestamp_ms));
            let keypoints = errors.check(validate_keypoints(index, frame.keypoints));
            if let (Some(timestamp_ms), Some(keypoints)) = (timestamp_ms, keypoints) {
                frames.push(PracticeFrame {
                    timestamp_ms,
                    keypoints,
                });
            }
        }

        match (user_id, lesson_id, mode) {
            (Some(user_id), Some(lesson_id), Some(mode)) if errors.is_empty() => {
                Ok(PracticeRequest {
                    user_id,
                    lesson_id,
                    mode,
                    frames,
                })
            }
            _ => Err(errors),
        }
    }
}

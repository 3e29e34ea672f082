//! Explicit field validation for practice submissions.
//!
//! Each validator checks a single field and returns either the typed value or
//! a [`Violation`] naming the field. [`ValidationErrors`] collects violations
//! across a whole payload so a client sees every problem at once.

use common::{LessonId, UserId};
use serde::Serialize;
use thiserror::Error;

use crate::practice::{MAX_FRAMES, MIN_FRAMES, PracticeMode};

/// A single constraint violation on one field of a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{field}: {message}")]
pub struct Violation {
    /// Path of the offending field, e.g. `frames[2].timestamp_ms`.
    pub field: String,
    /// Human-readable description of the constraint that failed.
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// All violations found in a payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", join(.violations))]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the violation of a failed check and returns the value of a
    /// passing one.
    pub fn check<T>(&mut self, result: Result<T, Violation>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(violation) => {
                self.violations.push(violation);
                None
            }
        }
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Returns true if any violation was recorded against `field`.
    pub fn contains_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<Violation> for ValidationErrors {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
        }
    }
}

/// Validates the `user_id` field.
pub fn validate_user_id(raw: &str) -> Result<UserId, Violation> {
    UserId::parse_str(raw)
        .map_err(|e| Violation::new("user_id", format!("must be a valid UUID: {e}")))
}

/// Validates the optional `lesson_id` field. Absent and `null` both mean no lesson.
pub fn validate_lesson_id(raw: Option<&str>) -> Result<Option<LessonId>, Violation> {
    raw.map(|s| {
        LessonId::parse_str(s)
            .map_err(|e| Violation::new("lesson_id", format!("must be a valid UUID: {e}")))
    })
    .transpose()
}

/// Validates the `mode` field against the exact literals.
pub fn validate_mode(raw: &str) -> Result<PracticeMode, Violation> {
    raw.parse::<PracticeMode>().map_err(|e| Violation::new("mode", e.to_string()))
}

/// Validates the number of submitted frames.
pub fn validate_frame_count(count: usize) -> Result<(), Violation> {
    if count < MIN_FRAMES {
        return Err(Violation::new(
            "frames",
            format!("must contain at least {MIN_FRAMES} item(s), got {count}"),
        ));
    }
    if count > MAX_FRAMES {
        return Err(Violation::new(
            "frames",
            format!("must contain at most {MAX_FRAMES} items, got {count}"),
        ));
    }
    Ok(())
}

/// Validates the timestamp of the frame at `index`.
pub fn validate_timestamp(index: usize, raw: i128) -> Result<u64, Violation> {
    let field = || format!("frames[{index}].timestamp_ms");
    if raw < 0 {
        return Err(Violation::new(
            field(),
            format!("must be greater than or equal to 0, got {raw}"),
        ));
    }
    u64::try_from(raw).map_err(|_| {
        Violation::new(
            field(),
            format!("must be less than or equal to {}, got {raw}", u64::MAX),
        )
    })
}

/// Validates the keypoint rows of the frame at `index`.
///
/// Only the outer sequence must be non-empty; individual rows may be empty.
pub fn validate_keypoints(
    index: usize,
    raw: Vec<Vec<f64>>,
) -> Result<Vec<Vec<f64>>, Violation> {
    if raw.is_empty() {
        return Err(Violation::new(
            format!("frames[{index}].keypoints"),
            "must contain at least 1 item(s)",
        ));
    }
    Ok(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_accepts_uuid() {
        let id = validate_user_id("00000000-0000-0000-0000-000000000000").unwrap();
        assert_eq!(id.to_string(), "00000000-0000-0000-0000-000000000000");
    }

    #[test]
    fn user_id_rejects_non_uuid() {
        let err = validate_user_id("user-42").unwrap_err();
        assert_eq!(err.field, "user_id");
        assert!(err.message.starts_with("must be a valid UUID"));
    }

    #[test]
    fn lesson_id_absent_is_none() {
        assert_eq!(validate_lesson_id(None).unwrap(), None);
    }

    #[test]
    fn lesson_id_rejects_non_uuid() {
        let err = validate_lesson_id(Some("lesson-1")).unwrap_err();
        assert_eq!(err.field, "lesson_id");
    }

    #[test]
    fn mode_is_case_sensitive() {
        assert_eq!(validate_mode("word").unwrap(), PracticeMode::Word);
        assert_eq!(validate_mode("freestyle").unwrap(), PracticeMode::Freestyle);
        assert_eq!(validate_mode("Word").unwrap_err().field, "mode");
        assert_eq!(validate_mode("phrase").unwrap_err().field, "mode");
        assert_eq!(validate_mode("").unwrap_err().field, "mode");
    }

    #[test]
    fn frame_count_bounds() {
        assert!(validate_frame_count(0).is_err());
        assert!(validate_frame_count(1).is_ok());
        assert!(validate_frame_count(MAX_FRAMES).is_ok());
        assert!(validate_frame_count(MAX_FRAMES + 1).is_err());
    }

    #[test]
    fn timestamp_rejects_negative() {
        assert_eq!(validate_timestamp(0, 0).unwrap(), 0);
        assert_eq!(validate_timestamp(0, u64::MAX as i128).unwrap(), u64::MAX);
        let err = validate_timestamp(3, -1).unwrap_err();
        assert_eq!(err.field, "frames[3].timestamp_ms");
        assert!(err.message.starts_with("must be greater than or equal to 0"));
    }

    #[test]
    fn timestamp_rejects_values_past_u64() {
        let err = validate_timestamp(1, u64::MAX as i128 + 1).unwrap_err();
        assert_eq!(err.field, "frames[1].timestamp_ms");
        assert!(err.message.starts_with("must be less than or equal to"));
    }

    #[test]
    fn keypoints_require_one_row_but_allow_empty_rows() {
        assert!(validate_keypoints(0, vec![vec![]]).is_ok());
        let err = validate_keypoints(7, vec![]).unwrap_err();
        assert_eq!(err.field, "frames[7].keypoints");
    }

    #[test]
    fn errors_collect_and_display_in_order() {
        let mut errors = ValidationErrors::new();
        assert_eq!(errors.check(validate_mode("word")), Some(PracticeMode::Word));
        assert_eq!(errors.check(validate_mode("bogus")), None);
        errors.push(Violation::new("frames", "must contain at least 1 item(s), got 0"));

        assert_eq!(errors.len(), 2);
        assert!(errors.contains_field("mode"));
        assert!(errors.contains_field("frames"));
        assert!(errors.to_string().contains("; frames: "));
    }
}

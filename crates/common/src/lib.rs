//! Shared identifier types for the practice scoring service.

mod types;

pub use types::{LessonId, SessionId, UserId};

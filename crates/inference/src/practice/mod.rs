//! Practice submission model.

mod mode;
mod request;
mod response;

pub use mode::{ParseModeError, PracticeMode};
pub use request::{
    MAX_FRAMES, MIN_FRAMES, PracticeFrame, PracticeRequest, UncheckedPracticeFrame,
    UncheckedPracticeRequest,
};
pub use response::{PracticeResponse, Score};

//! Practice modes.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of practice a submission belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PracticeMode {
    /// A single sign.
    Word,
    /// A signed sentence.
    Sentence,
    /// Unscripted signing.
    Freestyle,
}

impl PracticeMode {
    /// Every accepted mode, in wire order.
    pub const ALL: [PracticeMode; 3] = [
        PracticeMode::Word,
        PracticeMode::Sentence,
        PracticeMode::Freestyle,
    ];

    /// Returns the wire literal for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            PracticeMode::Word => "word",
            PracticeMode::Sentence => "sentence",
            PracticeMode::Freestyle => "freestyle",
        }
    }
}

impl std::fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the exact mode literals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("must be one of 'word', 'sentence', 'freestyle', got '{0}'")]
pub struct ParseModeError(pub String);

impl FromStr for PracticeMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PracticeMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}

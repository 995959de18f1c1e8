//! Unified error handling for the crawlrace library.
//!
//! Errors only arise at the input boundary (pattern parsing, scenario files).
//! The race computation itself has no failure path: a racer that cannot
//! finish is reported with the sentinel [`crate::MAX_TIME`], not an error.

use thiserror::Error;

/// Errors that can occur while building a race setup.
#[derive(Debug, Error)]
pub enum RaceError {
    /// A track pattern contained a character other than '0' or '1'.
    #[error("invalid track cell '{cell}' at index {index} (expected '0' or '1')")]
    InvalidTrackCell {
        /// Position of the offending character
        index: usize,
        /// The offending character
        cell: char,
    },

    /// An inline racer spec could not be parsed.
    #[error("invalid racer spec '{spec}': {reason}")]
    InvalidRacerSpec {
        /// The spec as given
        spec: String,
        /// What was wrong with it
        reason: String,
    },

    /// A scenario with no racers at all.
    #[error("scenario has no racers")]
    EmptyScenario,

    /// Failed to read a scenario file.
    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a scenario file.
    #[error("failed to parse scenario JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RaceError>;

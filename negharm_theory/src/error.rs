//! Error types for note and chord operations.

use thiserror::Error;

/// Result type for theory operations.
pub type Result<T> = std::result::Result<T, TheoryError>;

/// Errors that can occur while parsing notes and chords.
///
/// Lookup misses (unknown chord quality, unknown interval signature) are not
/// errors; they yield an empty chord or the unidentified sentinel instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// The chord symbol does not start with a root letter A-G.
    #[error("invalid chord symbol '{0}': expected a root note A-G")]
    InvalidChordSymbol(String),

    /// A note name is not one of the twelve sharp-spelled pitch classes.
    #[error("invalid note '{0}'")]
    InvalidNote(String),

    /// The tonal center is not one of the twelve sharp-spelled pitch classes.
    #[error("invalid tonic '{0}'")]
    InvalidTonic(String),
}

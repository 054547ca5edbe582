//! Error types for fretboard computations
//!
//! Contract violations (unknown scale, fret out of range) and "no result"
//! conditions the caller must handle (no playable position set) are errors.
//! Clicks outside the staff are not errors and are modelled as `Option`.

use thiserror::Error;

/// Errors raised by the pitch, scale and position modules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Scale name not present in the scale table
    #[error("Scale not found: '{0}'")]
    ScaleNotFound(String),

    /// Key name could not be parsed into a pitch class
    #[error("Invalid key: '{0}'")]
    InvalidKey(String),

    /// Fret outside of [0, 24]
    #[error("Fret {0} out of range (must be 0-24)")]
    FretOutOfRange(i32),

    /// String number outside of 1-6
    #[error("Invalid string number {0} (must be 1-6)")]
    InvalidString(i32),

    /// No three-notes-per-string window fits the key/scale on the neck
    #[error("No playable positions for {key} {scale}")]
    NoPositions { key: String, scale: String },

    /// A pitch has no string/fret that sounds it
    #[error("Pitch {0} cannot be played on the fretboard")]
    Unplayable(i32),
}

/// Errors raised while setting up or running a quiz
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// The chosen string and fret range left no questions to ask
    #[error("No questions available for the selected strings and frets")]
    EmptyPool,

    /// Fret range text or bounds were not usable
    #[error("Invalid fret range: {0}")]
    InvalidFretRange(String),

    #[error("Invalid string range: '{0}' (expected all, treble or bass)")]
    InvalidStringRange(String),

    #[error(transparent)]
    Theory(#[from] TheoryError),
}

/// Errors raised while exporting a run to a Standard MIDI File
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Pitch {0} is outside the MIDI range")]
    PitchOutOfRange(i32),

    #[error("Failed to write MIDI: {0}")]
    Midi(String),

    #[error(transparent)]
    Theory(#[from] TheoryError),
}

/// Failures of the high-score backing store
///
/// These never abort the quiz; the ledger degrades to empty or unsaved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Stored scores are corrupt: {0}")]
    Corrupt(String),
}

pub type Result<T, E = TheoryError> = std::result::Result<T, E>;

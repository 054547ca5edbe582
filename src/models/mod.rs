//! Models module for the fretboard engine
//!
//! This module contains the data models shared by the position generator,
//! the layout hit-tests and the quiz.

pub mod fingering;
pub mod guitar;
pub mod key;
pub mod pitch;

// Re-export commonly used types
pub use fingering::{FingeringNote, FingeringSequence};
pub use guitar::{FretPosition, GuitarString, MAX_FRET, STRING_COUNT};
pub use key::Key;
pub use pitch::Pitch;

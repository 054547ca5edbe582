//! Guitar strings and fretboard positions
//!
//! Strings are numbered 1-6 with 1 the highest pitch (high E). The 0-based
//! high-to-low index convention used by the diagram code maps directly onto
//! the string number minus one.

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::errors::{Result, TheoryError};
use crate::models::pitch::Pitch;

/// Number of strings on the instrument
pub const STRING_COUNT: usize = 6;

/// Highest fret on the neck
pub const MAX_FRET: u8 = 24;

/// Open-string pitches in standard tuning, high to low (E4 B3 G3 D3 A2 E2)
pub const STANDARD_TUNING: [i32; STRING_COUNT] = [64, 59, 55, 50, 45, 40];

/// Tab labels, high to low
const STRING_LABELS: [&str; STRING_COUNT] = ["e", "B", "G", "D", "A", "E"];

/// Pitch of a string/fret pair. Callers keep the fret within [0, 24].
pub fn position_to_midi(open_pitch: i32, fret: i32) -> i32 {
    open_pitch + fret
}

/// One of the six strings, by string number (1 = high E)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GuitarString(u8);

impl GuitarString {
    pub const HIGH_E: GuitarString = GuitarString(1);
    pub const LOW_E: GuitarString = GuitarString(6);

    pub fn new(number: i32) -> Result<Self> {
        if (1..=STRING_COUNT as i32).contains(&number) {
            Ok(GuitarString(number as u8))
        } else {
            Err(TheoryError::InvalidString(number))
        }
    }

    /// From a 0-based index counted from the highest string
    pub fn from_index(index: usize) -> Result<Self> {
        GuitarString::new(index as i32 + 1)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn open_pitch(self) -> Pitch {
        Pitch(STANDARD_TUNING[self.index()])
    }

    pub fn label(self) -> &'static str {
        STRING_LABELS[self.index()]
    }

    /// Strings 1 through 6 (highest pitch first)
    pub fn high_to_low() -> impl DoubleEndedIterator<Item = GuitarString> {
        (1..=STRING_COUNT as u8).map(GuitarString)
    }

    /// Strings 6 through 1 (lowest pitch first)
    pub fn low_to_high() -> impl Iterator<Item = GuitarString> {
        GuitarString::high_to_low().rev()
    }
}

impl TryFrom<u8> for GuitarString {
    type Error = TheoryError;

    fn try_from(number: u8) -> Result<Self> {
        GuitarString::new(number as i32)
    }
}

impl From<GuitarString> for u8 {
    fn from(string: GuitarString) -> u8 {
        string.0
    }
}

/// A string/fret pair on the neck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FretPosition {
    pub string: GuitarString,
    pub fret: u8,
}

impl FretPosition {
    /// Checked constructor for positions coming from callers
    pub fn new(string: GuitarString, fret: i32) -> Result<Self> {
        if !(0..=MAX_FRET as i32).contains(&fret) {
            return Err(TheoryError::FretOutOfRange(fret));
        }
        Ok(FretPosition {
            string,
            fret: fret as u8,
        })
    }

    pub fn pitch(self) -> Pitch {
        Pitch(position_to_midi(
            self.string.open_pitch().midi(),
            self.fret as i32,
        ))
    }
}

/// Every position sounding `pitch`, low string first
pub fn positions_for_pitch(pitch: Pitch) -> Vec<FretPosition> {
    GuitarString::low_to_high()
        .filter_map(|string| {
            let fret = pitch.midi() - string.open_pitch().midi();
            FretPosition::new(string, fret).ok()
        })
        .collect()
}

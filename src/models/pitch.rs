//! Pitch representation and naming
//!
//! A pitch is a MIDI note number (60 = C4). Its name and octave are always
//! derived from the number and never stored beside it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pitch-class names using sharps (the canonical spelling)
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Pitch-class names using flats
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Lowest pitch shown on the staff or fretboard (E2, open low E)
pub const LOWEST_PITCH: i32 = 40;

/// Highest pitch shown on the staff or fretboard (E6, 24th fret high E)
pub const HIGHEST_PITCH: i32 = 88;

/// A MIDI note number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pitch(pub i32);

impl Pitch {
    pub fn new(midi: i32) -> Self {
        Self(midi)
    }

    pub fn midi(self) -> i32 {
        self.0
    }

    /// Pitch class 0-11, `((midi % 12) + 12) % 12`
    pub fn pitch_class(self) -> u8 {
        self.0.rem_euclid(12) as u8
    }

    /// Octave number in scientific pitch notation (C4 = 60)
    pub fn octave(self) -> i32 {
        self.0.div_euclid(12) - 1
    }

    /// Sharp spelling of the pitch class
    pub fn name(self) -> &'static str {
        SHARP_NAMES[self.pitch_class() as usize]
    }

    /// Flat spelling of the pitch class
    pub fn flat_name(self) -> &'static str {
        FLAT_NAMES[self.pitch_class() as usize]
    }

    pub fn is_natural(self) -> bool {
        is_natural_class(self.pitch_class())
    }

    /// Name with octave, e.g. "E2" or "C#4"
    pub fn scientific_name(self) -> String {
        format!("{}{}", self.name(), self.octave())
    }

    /// Build a pitch from a pitch-class name and an octave number
    ///
    /// Accepts sharp and flat spellings ("C#", "Db", "c♯").
    pub fn from_name_octave(name: &str, octave: i32) -> Option<Pitch> {
        let pc = pitch_class_from_name(name)?;
        Some(Pitch((octave + 1) * 12 + pc as i32))
    }

    pub fn transpose(self, semitones: i32) -> Pitch {
        Pitch(self.0 + semitones)
    }

    /// Clamp into the displayable range [E2, E6]
    pub fn clamp_to_range(self) -> Pitch {
        Pitch(self.0.clamp(LOWEST_PITCH, HIGHEST_PITCH))
    }

    /// Equal-tempered frequency with A4 = 440 Hz
    pub fn frequency_hz(self) -> f64 {
        440.0 * 2f64.powf((self.0 - 69) as f64 / 12.0)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.scientific_name())
    }
}

impl From<i32> for Pitch {
    fn from(midi: i32) -> Self {
        Pitch(midi)
    }
}

pub fn is_natural_class(pc: u8) -> bool {
    !SHARP_NAMES[(pc % 12) as usize].contains('#')
}

/// Parse a pitch-class name into 0-11
///
/// The letter is case-insensitive; accidentals may be `#`, `♯`, `b`, `♭`,
/// doubled or not.
pub fn pitch_class_from_name(name: &str) -> Option<u8> {
    let name = name.trim();
    let mut chars = name.chars();
    let letter = chars.next()?;

    let base: i32 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let mut offset: i32 = 0;
    for c in chars {
        match c {
            '#' | '♯' => offset += 1,
            'b' | 'B' | '♭' => offset -= 1,
            _ => return None,
        }
    }

    if offset.abs() > 2 {
        return None;
    }

    Some((base + offset).rem_euclid(12) as u8)
}

/// Acceptable display names for a MIDI pitch
///
/// Naturals always yield their one name. Accidentals yield the sharp
/// spelling, the flat spelling, or both (sharp first) depending on the
/// flags; with neither flag the sharp spelling is used.
pub fn pitch_class_names(midi: i32, use_flats: bool, use_sharps: bool) -> Vec<String> {
    let pitch = Pitch(midi);

    if pitch.is_natural() {
        return vec![pitch.name().to_string()];
    }

    match (use_flats, use_sharps) {
        (true, true) => vec![pitch.name().to_string(), pitch.flat_name().to_string()],
        (true, false) => vec![pitch.flat_name().to_string()],
        _ => vec![pitch.name().to_string()],
    }
}

/// The other single-accidental spelling of a pitch-class name, if any
///
/// Covers the black keys (C# ↔ Db …) and the naturals that have one
/// (E ↔ Fb, F ↔ E#, B ↔ Cb, C ↔ B#).
pub fn enharmonic_spelling(name: &str) -> Option<&'static str> {
    match name {
        "C#" => Some("Db"),
        "Db" => Some("C#"),
        "D#" => Some("Eb"),
        "Eb" => Some("D#"),
        "F#" => Some("Gb"),
        "Gb" => Some("F#"),
        "G#" => Some("Ab"),
        "Ab" => Some("G#"),
        "A#" => Some("Bb"),
        "Bb" => Some("A#"),
        "E" => Some("Fb"),
        "Fb" => Some("E"),
        "F" => Some("E#"),
        "E#" => Some("F"),
        "B" => Some("Cb"),
        "Cb" => Some("B"),
        "C" => Some("B#"),
        "B#" => Some("C"),
        _ => None,
    }
}

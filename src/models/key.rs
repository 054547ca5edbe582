//! Key centers (root pitch classes) for scale positions
//!
//! Represents the 12 pitch classes with their canonical sharp spelling.
//! Flat names parse to the same key (Db → C#), since fretboard positions
//! only depend on the pitch class.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TheoryError;
use crate::models::pitch::{pitch_class_from_name, Pitch, SHARP_NAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    C,
    #[serde(rename = "C#")]
    Cs,
    D,
    #[serde(rename = "D#")]
    Ds,
    E,
    F,
    #[serde(rename = "F#")]
    Fs,
    G,
    #[serde(rename = "G#")]
    Gs,
    A,
    #[serde(rename = "A#")]
    As,
    B,
}

impl Key {
    /// All keys in chromatic order from C
    pub const ALL: [Key; 12] = [
        Key::C,
        Key::Cs,
        Key::D,
        Key::Ds,
        Key::E,
        Key::F,
        Key::Fs,
        Key::G,
        Key::Gs,
        Key::A,
        Key::As,
        Key::B,
    ];

    pub fn from_pitch_class(pc: u8) -> Key {
        Key::ALL[(pc % 12) as usize]
    }

    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        SHARP_NAMES[self.pitch_class() as usize]
    }

    /// Fret of the root on the low E string (0-11)
    pub fn root_fret(self) -> u8 {
        match self {
            Key::E => 0,
            Key::F => 1,
            Key::Fs => 2,
            Key::G => 3,
            Key::Gs => 4,
            Key::A => 5,
            Key::As => 6,
            Key::B => 7,
            Key::C => 8,
            Key::Cs => 9,
            Key::D => 10,
            Key::Ds => 11,
        }
    }

    /// Root pitch on the low E string
    pub fn root_pitch(self) -> Pitch {
        Pitch(40 + self.root_fret() as i32)
    }

    /// Whether a pitch sounds this key's root
    pub fn is_root(self, pitch: Pitch) -> bool {
        pitch.pitch_class() == self.pitch_class()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Key {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        pitch_class_from_name(s)
            .map(Key::from_pitch_class)
            .ok_or_else(|| TheoryError::InvalidKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_naturals() {
        assert_eq!("C".parse::<Key>().unwrap(), Key::C);
        assert_eq!("e".parse::<Key>().unwrap(), Key::E);
        assert_eq!("A".parse::<Key>().unwrap(), Key::A);
    }

    #[test]
    fn test_from_str_accidentals() {
        assert_eq!("C#".parse::<Key>().unwrap(), Key::Cs);
        assert_eq!("Db".parse::<Key>().unwrap(), Key::Cs);
        assert_eq!("bb".parse::<Key>().unwrap(), Key::As);
        assert_eq!("F♯".parse::<Key>().unwrap(), Key::Fs);
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "X".parse::<Key>(),
            Err(TheoryError::InvalidKey("X".to_string()))
        );
    }

    #[test]
    fn test_root_fret_matches_low_e() {
        for key in Key::ALL {
            let pitch = Pitch(40 + key.root_fret() as i32);
            assert_eq!(pitch.pitch_class(), key.pitch_class(), "{}", key);
        }
        assert_eq!(Key::A.root_fret(), 5);
        assert_eq!(Key::E.root_pitch(), Pitch(40));
    }

    #[test]
    fn test_serde_uses_sharp_names() {
        assert_eq!(serde_json::to_string(&Key::Fs).unwrap(), "\"F#\"");
        let key: Key = serde_json::from_str("\"G#\"").unwrap();
        assert_eq!(key, Key::Gs);
    }
}

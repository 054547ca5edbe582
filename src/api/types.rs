//! Shared types for the WASM API
//!
//! This module contains result types returned to JavaScript by more than one
//! API module.

use serde::{Deserialize, Serialize};

use crate::models::pitch::pitch_class_names;
use crate::models::{FretPosition, Pitch};

/// Everything the pages display about a single pitch
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PitchInfo {
    pub midi: i32,
    pub name: String,
    pub flat_name: String,
    pub octave: i32,
    pub frequency_hz: f64,
}

impl From<Pitch> for PitchInfo {
    fn from(pitch: Pitch) -> Self {
        Self {
            midi: pitch.midi(),
            name: pitch.name().to_string(),
            flat_name: pitch.flat_name().to_string(),
            octave: pitch.octave(),
            frequency_hz: pitch.frequency_hz(),
        }
    }
}

/// A position found under the pointer on the fretboard drawing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FretboardHit {
    pub string: u8,
    pub fret: u8,
    pub midi: i32,
    pub names: Vec<String>,
}

impl FretboardHit {
    pub fn new(position: FretPosition, use_flats: bool, use_sharps: bool) -> Self {
        let midi = position.pitch().midi();
        Self {
            string: position.string.number(),
            fret: position.fret,
            midi,
            names: pitch_class_names(midi, use_flats, use_sharps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GuitarString;

    #[test]
    fn test_pitch_info() {
        let info = PitchInfo::from(Pitch(61));
        assert_eq!(info.name, "C#");
        assert_eq!(info.flat_name, "Db");
        assert_eq!(info.octave, 4);
    }

    #[test]
    fn test_fretboard_hit() {
        let position = FretPosition::new(GuitarString::new(5).unwrap(), 1).unwrap();
        let hit = FretboardHit::new(position, true, true);
        assert_eq!(hit.midi, 46);
        assert_eq!(hit.names, vec!["A#", "Bb"]);
    }
}

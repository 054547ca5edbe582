//! Scale definition table
//!
//! Static, read-only mapping from scale name to semitone offsets above the
//! root. Offsets are ascending and always start at 0.

use lazy_static::lazy_static;
use serde::Serialize;
use std::collections::HashMap;

use crate::errors::{Result, TheoryError};
use crate::models::Key;

/// Name of the scale that uses box patterns instead of 3NPS windows
pub const MINOR_PENTATONIC: &str = "Minor Pentatonic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub name: &'static str,
    pub intervals: &'static [u8],
}

const SCALES: &[Scale] = &[
    Scale { name: "Major", intervals: &[0, 2, 4, 5, 7, 9, 11] },
    Scale { name: "Natural Minor", intervals: &[0, 2, 3, 5, 7, 8, 10] },
    Scale { name: "Harmonic Minor", intervals: &[0, 2, 3, 5, 7, 8, 11] },
    Scale { name: "Melodic Minor", intervals: &[0, 2, 3, 5, 7, 9, 11] },
    Scale { name: "Dorian", intervals: &[0, 2, 3, 5, 7, 9, 10] },
    Scale { name: "Phrygian", intervals: &[0, 1, 3, 5, 7, 8, 10] },
    Scale { name: "Lydian", intervals: &[0, 2, 4, 6, 7, 9, 11] },
    Scale { name: "Mixolydian", intervals: &[0, 2, 4, 5, 7, 9, 10] },
    Scale { name: "Locrian", intervals: &[0, 1, 3, 5, 6, 8, 10] },
    Scale { name: "Major Pentatonic", intervals: &[0, 2, 4, 7, 9] },
    Scale { name: MINOR_PENTATONIC, intervals: &[0, 3, 5, 7, 10] },
    Scale { name: "Blues", intervals: &[0, 3, 5, 6, 7, 10] },
    Scale { name: "Major Blues", intervals: &[0, 2, 3, 4, 7, 9] },
    Scale { name: "Bebop Dominant", intervals: &[0, 2, 4, 5, 7, 9, 10, 11] },
    Scale { name: "Bebop Major", intervals: &[0, 2, 4, 5, 7, 8, 9, 11] },
    Scale { name: "Bebop Dorian", intervals: &[0, 2, 3, 4, 5, 7, 9, 10] },
    Scale { name: "Whole Tone", intervals: &[0, 2, 4, 6, 8, 10] },
    Scale { name: "Diminished (Whole-Half)", intervals: &[0, 2, 3, 5, 6, 8, 9, 11] },
    Scale { name: "Diminished (Half-Whole)", intervals: &[0, 1, 3, 4, 6, 7, 9, 10] },
    Scale { name: "Phrygian Dominant", intervals: &[0, 1, 4, 5, 7, 8, 10] },
    Scale { name: "Lydian Dominant", intervals: &[0, 2, 4, 6, 7, 9, 10] },
    Scale { name: "Altered", intervals: &[0, 1, 3, 4, 6, 8, 10] },
    Scale { name: "Hungarian Minor", intervals: &[0, 2, 3, 6, 7, 8, 11] },
];

lazy_static! {
    // Case-insensitive lookup index
    static ref SCALE_INDEX: HashMap<String, &'static Scale> = SCALES
        .iter()
        .map(|scale| (scale.name.to_lowercase(), scale))
        .collect();
}

/// Look up a scale by name
///
/// Exact names match first; otherwise the lookup ignores case. Unknown names
/// are an error, never a silent default.
pub fn find_scale(name: &str) -> Result<&'static Scale> {
    if let Some(scale) = SCALES.iter().find(|scale| scale.name == name) {
        return Ok(scale);
    }

    SCALE_INDEX
        .get(&name.trim().to_lowercase())
        .copied()
        .ok_or_else(|| TheoryError::ScaleNotFound(name.to_string()))
}

/// Scale names in table order
pub fn scale_names() -> Vec<&'static str> {
    SCALES.iter().map(|scale| scale.name).collect()
}

impl Scale {
    /// Membership table of the pitch classes this scale has in `key`
    pub fn pitch_classes(&self, key: Key) -> [bool; 12] {
        let mut classes = [false; 12];
        for &interval in self.intervals {
            classes[((key.pitch_class() + interval) % 12) as usize] = true;
        }
        classes
    }

    pub fn is_minor_pentatonic(&self) -> bool {
        self.name == MINOR_PENTATONIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_well_formed() {
        assert_eq!(SCALES.len(), 23);
        for scale in SCALES {
            assert!((5..=8).contains(&scale.intervals.len()), "{}", scale.name);
            assert_eq!(scale.intervals[0], 0, "{}", scale.name);
            assert!(
                scale.intervals.windows(2).all(|w| w[0] < w[1] && w[1] < 12),
                "{} must be strictly ascending within an octave",
                scale.name
            );
        }
    }

    #[test]
    fn test_find_scale() {
        assert_eq!(find_scale("Major").unwrap().intervals, &[0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(find_scale("major pentatonic").unwrap().name, "Major Pentatonic");
        assert!(find_scale(MINOR_PENTATONIC).unwrap().is_minor_pentatonic());
    }

    #[test]
    fn test_unknown_scale_is_an_error() {
        assert_eq!(
            find_scale("Super Locrian Bebop"),
            Err(TheoryError::ScaleNotFound("Super Locrian Bebop".to_string()))
        );
    }

    #[test]
    fn test_pitch_classes_for_c_major() {
        let classes = find_scale("Major").unwrap().pitch_classes(Key::C);
        let members: Vec<usize> = (0..12).filter(|&pc| classes[pc]).collect();
        assert_eq!(members, vec![0, 2, 4, 5, 7, 9, 11]);
    }

    #[test]
    fn test_scale_names_order() {
        let names = scale_names();
        assert_eq!(names.first(), Some(&"Major"));
        assert!(names.contains(&MINOR_PENTATONIC));
    }
}

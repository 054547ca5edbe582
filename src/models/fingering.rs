//! Fingering sequences handed to the diagram, tab and audio consumers

use serde::{Deserialize, Serialize};

use crate::models::guitar::{FretPosition, GuitarString};
use crate::models::key::Key;
use crate::models::pitch::Pitch;

/// One note of a fingering: where to put the finger and whether it is a root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingeringNote {
    pub string: GuitarString,
    pub fret: u8,
    pub is_root: bool,
}

impl FingeringNote {
    pub fn new(position: FretPosition, key: Key) -> Self {
        Self {
            string: position.string,
            fret: position.fret,
            is_root: key.is_root(position.pitch()),
        }
    }

    pub fn position(&self) -> FretPosition {
        FretPosition {
            string: self.string,
            fret: self.fret,
        }
    }

    pub fn pitch(&self) -> Pitch {
        self.position().pitch()
    }
}

/// An ordered pass over a scale shape (usually up then down)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FingeringSequence {
    pub label: String,
    pub min_fret: u8,
    pub max_fret: u8,
    pub notes: Vec<FingeringNote>,
}

impl FingeringSequence {
    /// Build from positions already in playing order
    pub fn from_positions(label: impl Into<String>, positions: &[FretPosition], key: Key) -> Self {
        let notes: Vec<FingeringNote> = positions
            .iter()
            .map(|&position| FingeringNote::new(position, key))
            .collect();

        let min_fret = notes.iter().map(|n| n.fret).min().unwrap_or(0);
        let max_fret = notes.iter().map(|n| n.fret).max().unwrap_or(0);

        Self {
            label: label.into(),
            min_fret,
            max_fret,
            notes,
        }
    }

    /// Build an up-then-down pass from the ascending half
    pub fn from_ascending(label: impl Into<String>, ascending: Vec<FretPosition>, key: Key) -> Self {
        Self::from_positions(label, &up_then_down(ascending), key)
    }

    pub fn pitches(&self) -> Vec<Pitch> {
        self.notes.iter().map(FingeringNote::pitch).collect()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Append the reverse of all but the last element, so the peak is played once
pub fn up_then_down<T: Clone>(mut ascending: Vec<T>) -> Vec<T> {
    let descending: Vec<T> = ascending.iter().rev().skip(1).cloned().collect();
    ascending.extend(descending);
    ascending
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_then_down() {
        assert_eq!(up_then_down(vec![1, 2, 3]), vec![1, 2, 3, 2, 1]);
        assert_eq!(up_then_down(vec![7]), vec![7]);
        assert!(up_then_down(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_root_flag_follows_pitch_class() {
        let low_a = FretPosition::new(GuitarString::LOW_E, 5).unwrap();
        let low_c = FretPosition::new(GuitarString::LOW_E, 8).unwrap();
        let seq = FingeringSequence::from_ascending("test", vec![low_a, low_c], Key::A);

        assert_eq!(seq.len(), 3);
        assert!(seq.notes[0].is_root);
        assert!(!seq.notes[1].is_root);
        assert!(seq.notes[2].is_root);
        assert_eq!((seq.min_fret, seq.max_fret), (5, 8));
        assert_eq!(seq.pitches(), vec![Pitch(45), Pitch(48), Pitch(45)]);
    }
}

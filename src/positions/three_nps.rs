//! Three-notes-per-string position windows
//!
//! A 7-fret window slides up the neck in 2-fret steps. A window is playable
//! when every string has at least three scale tones inside it; the lowest
//! three on each string form the shape.

use std::collections::BTreeMap;

use crate::errors::{Result, TheoryError};
use crate::models::guitar::{FretPosition, GuitarString, MAX_FRET};
use crate::models::{FingeringSequence, Key};
use crate::scales::Scale;

/// Width of the sliding window, in frets (inclusive span)
pub const WINDOW_WIDTH: u8 = 7;

/// Distance between consecutive window starts
pub const WINDOW_STEP: u8 = 2;

const NOTES_PER_STRING: usize = 3;

/// Frets 0..=24 on `string` whose pitch class belongs to the scale
fn scale_frets(string: GuitarString, classes: &[bool; 12]) -> Vec<u8> {
    (0..=MAX_FRET)
        .filter(|&fret| {
            let pitch = FretPosition { string, fret }.pitch();
            classes[pitch.pitch_class() as usize]
        })
        .collect()
}

/// Ascending positions for the window starting at `start`, if every string fits
fn window_shape(start: u8, frets_by_string: &[(GuitarString, Vec<u8>)]) -> Option<Vec<FretPosition>> {
    let end = start + WINDOW_WIDTH - 1;
    let mut ascending = Vec::with_capacity(frets_by_string.len() * NOTES_PER_STRING);

    for (string, frets) in frets_by_string {
        let inside: Vec<u8> = frets
            .iter()
            .copied()
            .filter(|&fret| fret >= start && fret <= end)
            .take(NOTES_PER_STRING)
            .collect();

        if inside.len() < NOTES_PER_STRING {
            return None;
        }

        ascending.extend(inside.into_iter().map(|fret| FretPosition { string: *string, fret }));
    }

    Some(ascending)
}

/// Every distinct 3NPS shape for `scale` in `key`, ordered up the neck
pub fn three_notes_per_string(key: Key, scale: &Scale) -> Result<Vec<FingeringSequence>> {
    let classes = scale.pitch_classes(key);
    let frets_by_string: Vec<(GuitarString, Vec<u8>)> = GuitarString::low_to_high()
        .map(|string| (string, scale_frets(string, &classes)))
        .collect();

    // Start grid aligned to the root fret's parity so one window begins on it
    let first_start = key.root_fret() % WINDOW_STEP;
    let last_start = MAX_FRET + 1 - WINDOW_WIDTH;

    let mut shapes: BTreeMap<(u8, u8), Vec<FretPosition>> = BTreeMap::new();
    for start in (first_start..=last_start).step_by(WINDOW_STEP as usize) {
        if let Some(ascending) = window_shape(start, &frets_by_string) {
            let min = ascending.iter().map(|p| p.fret).min().unwrap_or(start);
            let max = ascending.iter().map(|p| p.fret).max().unwrap_or(start);
            shapes.entry((min, max)).or_insert(ascending);
        }
    }

    if shapes.is_empty() {
        return Err(TheoryError::NoPositions {
            key: key.to_string(),
            scale: scale.name.to_string(),
        });
    }

    log::debug!("{} {}: {} 3NPS positions", key, scale.name, shapes.len());

    Ok(shapes
        .into_iter()
        .enumerate()
        .map(|(i, ((min, max), ascending))| {
            let label = format!("Position {} (frets {}-{})", i + 1, min, max);
            FingeringSequence::from_ascending(label, ascending, key)
        })
        .collect())
}

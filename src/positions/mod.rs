//! Position generator
//!
//! Turns a key and scale into renderable fingering sequences:
//! - `pentatonic`: the five minor pentatonic boxes
//! - `three_nps`: three-notes-per-string windows for every other scale
//! - `run`: an exact two-octave run mapped by a greedy position walk

pub mod pentatonic;
pub mod run;
pub mod three_nps;

pub use pentatonic::minor_pentatonic_boxes;
pub use run::{map_to_positions, two_octave_run, two_octave_run_pitches};
pub use three_nps::three_notes_per_string;

use crate::errors::Result;
use crate::models::{FingeringSequence, Key};
use crate::scales::find_scale;

/// Position sets for a key and scale name
///
/// Minor pentatonic uses the box patterns; all other scales use 3NPS
/// windows.
pub fn scale_positions(key: Key, scale_name: &str) -> Result<Vec<FingeringSequence>> {
    let scale = find_scale(scale_name)?;

    if scale.is_minor_pentatonic() {
        Ok(minor_pentatonic_boxes(key))
    } else {
        three_notes_per_string(key, scale)
    }
}

/// Two-octave run for a key and scale name
pub fn scale_run(key: Key, scale_name: &str) -> Result<FingeringSequence> {
    two_octave_run(key, find_scale(scale_name)?)
}

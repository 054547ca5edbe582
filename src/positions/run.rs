//! Exact two-octave scale runs
//!
//! The run is built as literal pitches first and then mapped onto the neck
//! with a greedy walk: each note takes the position cheapest to reach from
//! the previous one. The walk never backtracks, so wide-interval scales can
//! still produce large fret leaps.

use crate::errors::{Result, TheoryError};
use crate::models::fingering::up_then_down;
use crate::models::guitar::{positions_for_pitch, FretPosition};
use crate::models::{FingeringSequence, Key, Pitch};
use crate::scales::Scale;

const FRET_WEIGHT: f64 = 1.2;
const STRING_WEIGHT: f64 = 2.2;
const BACKWARD_STRING_PENALTY: f64 = 2.0;

/// Up-then-down pitches of a two-octave run starting on the low-E root
pub fn two_octave_run_pitches(key: Key, scale: &Scale) -> Vec<Pitch> {
    let root = key.root_pitch();

    let mut ascending: Vec<Pitch> = (0..2)
        .flat_map(|octave| {
            scale
                .intervals
                .iter()
                .map(move |&interval| root.transpose(octave * 12 + interval as i32))
        })
        .collect();
    ascending.push(root.transpose(24));
    ascending.dedup();

    up_then_down(ascending)
}

/// Cost of moving from `prev` to `next`
fn move_cost(prev: FretPosition, next: FretPosition) -> f64 {
    let fret_jump = (next.fret as f64 - prev.fret as f64).abs();
    let string_jump = (next.string.number() as f64 - prev.string.number() as f64).abs();
    let backward = if next.string.number() > prev.string.number() {
        BACKWARD_STRING_PENALTY
    } else {
        0.0
    };

    FRET_WEIGHT * fret_jump + STRING_WEIGHT * string_jump + backward
}

/// Map pitches to positions with the greedy nearest-position walk
///
/// The first note takes the first candidate (lowest string first). Ties
/// keep the earlier candidate.
pub fn map_to_positions(pitches: &[Pitch]) -> Result<Vec<FretPosition>> {
    let mut walked: Vec<FretPosition> = Vec::with_capacity(pitches.len());

    for &pitch in pitches {
        let candidates = positions_for_pitch(pitch);

        let chosen = match walked.last() {
            None => candidates.first().copied(),
            Some(&prev) => {
                let mut best: Option<(FretPosition, f64)> = None;
                for candidate in candidates {
                    let cost = move_cost(prev, candidate);
                    if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                        best = Some((candidate, cost));
                    }
                }
                best.map(|(position, _)| position)
            }
        };

        walked.push(chosen.ok_or(TheoryError::Unplayable(pitch.midi()))?);
    }

    Ok(walked)
}

/// Two-octave up-then-down run of `scale` in `key`, mapped onto the neck
pub fn two_octave_run(key: Key, scale: &Scale) -> Result<FingeringSequence> {
    let pitches = two_octave_run_pitches(key, scale);
    let positions = map_to_positions(&pitches)?;
    let label = format!("{} {} (2 octaves)", key, scale.name);

    log::debug!("{}: {} notes", label, positions.len());
    Ok(FingeringSequence::from_positions(label, &positions, key))
}

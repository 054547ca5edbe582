//! MIDI export of scale runs
//!
//! Turns a pitch list into a Standard MIDI File the page can offer as a
//! download, using the same tempo defaults as audio playback.

pub mod converter;
pub mod defaults;

pub use converter::{microseconds_per_quarter, pitches_to_notes, write_smf, MidiNote};
pub use defaults::{tempo_or_default, DEFAULT_PROGRAM, DEFAULT_TEMPO_BPM, DEFAULT_TPQ, DEFAULT_VELOCITY, NOTE_GATE};

//! Renderers module for the fretboard engine
//!
//! This module turns fingering sequences and pitch lists into the outputs
//! the pages consume: tablature text, audio schedules and MIDI files.

pub mod midi;
pub mod playback;
pub mod tab;

// Re-export commonly used items
pub use midi::write_smf;
pub use playback::{playback_schedule, PlaybackEvent, FADE_OUT_S};
pub use tab::render_tab;

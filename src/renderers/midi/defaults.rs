//! Default values for playback and MIDI export
//!
//! Provides sensible defaults for tempo, velocity, instrument, etc.

/// Default tempo in beats per minute (one scale note per beat)
pub const DEFAULT_TEMPO_BPM: f64 = 120.0;

/// Default MIDI velocity (1-127, where 64 is "normal")
pub const DEFAULT_VELOCITY: u8 = 80;

/// Default MIDI program (25 = Acoustic Guitar (steel) in General MIDI, 0-based)
pub const DEFAULT_PROGRAM: u8 = 25;

/// Default MIDI channel for the single guitar track
pub const DEFAULT_CHANNEL: u8 = 0;

/// Default ticks per quarter note (MIDI resolution)
pub const DEFAULT_TPQ: u16 = 480;

/// Fraction of each beat a note sounds before the next one starts
pub const NOTE_GATE: f64 = 0.9;

/// Resolve an optional tempo, falling back to the default for
/// missing or non-positive values
pub fn tempo_or_default(tempo_bpm: Option<f64>) -> f64 {
    match tempo_bpm {
        Some(bpm) if bpm.is_finite() && bpm > 0.0 => bpm,
        _ => DEFAULT_TEMPO_BPM,
    }
}

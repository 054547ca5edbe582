//! Audio playback schedules
//!
//! The page's Web Audio engine starts one oscillator per event. Times are in
//! seconds relative to the moment playback starts.

use serde::{Deserialize, Serialize};

use crate::models::Pitch;
use crate::renderers::midi::defaults::{tempo_or_default, NOTE_GATE};

/// Length of the gain ramp used when playback is stopped early
pub const FADE_OUT_S: f64 = 0.03;

/// Length of a single tone played on click
pub const SINGLE_NOTE_S: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackEvent {
    pub midi: i32,
    pub frequency_hz: f64,
    pub start_s: f64,
    pub duration_s: f64,
}

impl PlaybackEvent {
    pub fn single(pitch: Pitch) -> Self {
        Self {
            midi: pitch.midi(),
            frequency_hz: pitch.frequency_hz(),
            start_s: 0.0,
            duration_s: SINGLE_NOTE_S,
        }
    }
}

/// One event per pitch, one beat apart
pub fn playback_schedule(pitches: &[Pitch], tempo_bpm: Option<f64>) -> Vec<PlaybackEvent> {
    let beat_s = 60.0 / tempo_or_default(tempo_bpm);

    pitches
        .iter()
        .enumerate()
        .map(|(i, pitch)| PlaybackEvent {
            midi: pitch.midi(),
            frequency_hz: pitch.frequency_hz(),
            start_s: i as f64 * beat_s,
            duration_s: beat_s * NOTE_GATE,
        })
        .collect()
}

/// Total length of a schedule including the final note
pub fn schedule_length_s(schedule: &[PlaybackEvent]) -> f64 {
    schedule
        .iter()
        .map(|event| event.start_s + event.duration_s)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_spacing() {
        let schedule = playback_schedule(&[Pitch(69), Pitch(71), Pitch(72)], Some(60.0));
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule[0].start_s, 0.0);
        assert_eq!(schedule[1].start_s, 1.0);
        assert_eq!(schedule[2].start_s, 2.0);
        assert!((schedule[0].frequency_hz - 440.0).abs() < 1e-9);
        assert!((schedule[0].duration_s - 0.9).abs() < 1e-9);
        assert!((schedule_length_s(&schedule) - 2.9).abs() < 1e-9);
    }

    #[test]
    fn test_default_tempo() {
        let schedule = playback_schedule(&[Pitch(40), Pitch(41)], None);
        assert!((schedule[1].start_s - 0.5).abs() < 1e-9);
        assert!(schedule.windows(2).all(|w| w[0].start_s < w[1].start_s));
    }

    #[test]
    fn test_empty_schedule() {
        assert!(playback_schedule(&[], None).is_empty());
        assert_eq!(schedule_length_s(&[]), 0.0);
    }
}

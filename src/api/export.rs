//! Export operations for the WASM API
//!
//! This module provides the outputs handed to the page's collaborators:
//! - Tablature: plain text for a fingering sequence
//! - Playback: oscillator schedules for the Web Audio engine
//! - MIDI: Standard MIDI File bytes of a two-octave run

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, parse_key, serialize, to_js_error};
use crate::models::{FingeringSequence, Pitch};
use crate::positions;
use crate::renderers::playback::{playback_schedule as schedule, PlaybackEvent, FADE_OUT_S};
use crate::renderers::{render_tab as tab_text, write_smf};
use crate::{wasm_error, wasm_info};

// ============================================================================
// Tablature
// ============================================================================

/// Render a fingering sequence as six lines of tab, high e on top
#[wasm_bindgen(js_name = renderTab)]
pub fn render_tab(sequence_js: JsValue) -> Result<String, JsValue> {
    let sequence: FingeringSequence = deserialize(sequence_js, "Invalid fingering sequence")?;
    Ok(tab_text(&sequence.notes))
}

// ============================================================================
// Audio
// ============================================================================

/// Schedule a list of MIDI pitches one beat apart
#[wasm_bindgen(js_name = playbackSchedule)]
pub fn playback_schedule(pitches: Vec<i32>, tempo_bpm: Option<f64>) -> Result<JsValue, JsValue> {
    let pitches: Vec<Pitch> = pitches.into_iter().map(Pitch).collect();
    serialize(&schedule(&pitches, tempo_bpm), "Failed to serialize schedule")
}

/// A single tone for a clicked note
#[wasm_bindgen(js_name = noteEvent)]
pub fn note_event(midi: i32) -> Result<JsValue, JsValue> {
    serialize(&PlaybackEvent::single(Pitch(midi)), "Failed to serialize note event")
}

/// Gain ramp length to apply when stopping playback
#[wasm_bindgen(js_name = fadeOutSeconds)]
pub fn fade_out_seconds() -> f64 {
    FADE_OUT_S
}

// ============================================================================
// MIDI Export
// ============================================================================

/// Export the two-octave run of a key and scale to a Standard MIDI File
///
/// # Returns
/// SMF bytes (format 0), delivered to JS as a `Uint8Array`
#[wasm_bindgen(js_name = exportRunMidi)]
pub fn export_run_midi(key: &str, scale: &str, tempo_bpm: Option<f64>) -> Result<Vec<u8>, JsValue> {
    wasm_info!("exportRunMidi called: key={}, scale={}", key, scale);

    let key = parse_key(key)?;
    let run = positions::scale_run(key, scale).map_err(to_js_error)?;

    let bytes = write_smf(&run.pitches(), tempo_bpm).map_err(|e| {
        wasm_error!("MIDI export error: {}", e);
        JsValue::from_str(&format!("MIDI export error: {}", e))
    })?;

    wasm_info!("  MIDI generated: {} bytes", bytes.len());
    Ok(bytes)
}

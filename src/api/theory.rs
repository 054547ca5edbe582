//! Pitch and scale operations for the WASM API
//!
//! Thin wrappers over `models`, `scales` and `positions`. Everything crosses
//! the boundary as serde values or plain numbers.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{parse_key, parse_position, serialize, to_js_error};
use crate::api::types::PitchInfo;
use crate::models::guitar::positions_for_pitch;
use crate::models::pitch::pitch_class_names;
use crate::models::{Key, Pitch};
use crate::positions;
use crate::scales::scale_names as all_scale_names;
use crate::{wasm_info, wasm_log};

/// Display names of a MIDI pitch's class under the spelling flags
#[wasm_bindgen(js_name = pitchNames)]
pub fn pitch_names(midi: i32, use_flats: bool, use_sharps: bool) -> Result<JsValue, JsValue> {
    serialize(&pitch_class_names(midi, use_flats, use_sharps), "Failed to serialize names")
}

#[wasm_bindgen(js_name = pitchInfo)]
pub fn pitch_info(midi: i32) -> Result<JsValue, JsValue> {
    serialize(&PitchInfo::from(Pitch(midi)), "Failed to serialize pitch info")
}

/// MIDI pitch sounding at a string (1 = high e) and fret
#[wasm_bindgen(js_name = positionToMidi)]
pub fn position_to_midi(string_number: i32, fret: i32) -> Result<i32, JsValue> {
    Ok(parse_position(string_number, fret)?.pitch().midi())
}

/// Every position that sounds a MIDI pitch, low string first
#[wasm_bindgen(js_name = positionsForPitch)]
pub fn positions_for_midi(midi: i32) -> Result<JsValue, JsValue> {
    serialize(&positions_for_pitch(Pitch(midi)), "Failed to serialize positions")
}

#[wasm_bindgen(js_name = scaleNames)]
pub fn scale_names() -> Result<JsValue, JsValue> {
    serialize(&all_scale_names(), "Failed to serialize scale names")
}

#[wasm_bindgen(js_name = keyNames)]
pub fn key_names() -> Result<JsValue, JsValue> {
    let names: Vec<&str> = Key::ALL.iter().map(|k| k.as_str()).collect();
    serialize(&names, "Failed to serialize key names")
}

/// Fret of the key's root on the low E string
#[wasm_bindgen(js_name = rootFret)]
pub fn root_fret(key: &str) -> Result<u8, JsValue> {
    Ok(parse_key(key)?.root_fret())
}

/// Box patterns or 3NPS windows for a key and scale
#[wasm_bindgen(js_name = scalePositions)]
pub fn scale_positions(key: &str, scale: &str) -> Result<JsValue, JsValue> {
    wasm_info!("scalePositions called: key={}, scale={}", key, scale);

    let key = parse_key(key)?;
    let sequences = positions::scale_positions(key, scale).map_err(to_js_error)?;

    wasm_log!("  {} position sets", sequences.len());
    serialize(&sequences, "Failed to serialize positions")
}

/// Two-octave up-and-down run for a key and scale
#[wasm_bindgen(js_name = scaleRun)]
pub fn scale_run(key: &str, scale: &str) -> Result<JsValue, JsValue> {
    wasm_info!("scaleRun called: key={}, scale={}", key, scale);

    let key = parse_key(key)?;
    let run = positions::scale_run(key, scale).map_err(to_js_error)?;

    wasm_log!("  run has {} notes", run.len());
    serialize(&run, "Failed to serialize run")
}

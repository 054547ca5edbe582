//! Coordinate conversion functions
//!
//! These functions map pointer coordinates on the staff and fretboard
//! drawings to pitches and positions, and back. Geometry arguments are
//! optional; `undefined` uses the default layout.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, parse_position, serialize};
use crate::api::types::FretboardHit;
use crate::layout::{FretboardGeometry, StaffGeometry};
use crate::models::Pitch;

/// MIDI pitch under a click on the grand staff, or `undefined` off the staff
#[wasm_bindgen(js_name = staffHitTest)]
pub fn staff_hit_test(y: f64, geometry_js: JsValue) -> Result<Option<i32>, JsValue> {
    let geometry: StaffGeometry = deserialize_or_default(geometry_js, "Invalid staff geometry")?;
    Ok(geometry.hit_test(y).map(Pitch::midi))
}

/// Vertical position of the note head for a MIDI pitch
#[wasm_bindgen(js_name = staffPitchToY)]
pub fn staff_pitch_to_y(midi: i32, geometry_js: JsValue) -> Result<f64, JsValue> {
    let geometry: StaffGeometry = deserialize_or_default(geometry_js, "Invalid staff geometry")?;
    Ok(geometry.pitch_to_y(Pitch(midi)))
}

/// Position under a click on the fretboard, or `undefined`
#[wasm_bindgen(js_name = fretboardHitTest)]
pub fn fretboard_hit_test(
    x: f64,
    y: f64,
    geometry_js: JsValue,
    use_flats: bool,
    use_sharps: bool,
) -> Result<JsValue, JsValue> {
    let geometry: FretboardGeometry =
        deserialize_or_default(geometry_js, "Invalid fretboard geometry")?;

    let hit = geometry
        .hit_test(x, y)
        .map(|position| FretboardHit::new(position, use_flats, use_sharps));

    serialize(&hit, "Failed to serialize fretboard hit")
}

/// Pixel center of a string/fret marker
#[wasm_bindgen(js_name = fretboardPositionCenter)]
pub fn fretboard_position_center(
    string_number: i32,
    fret: i32,
    geometry_js: JsValue,
) -> Result<JsValue, JsValue> {
    let geometry: FretboardGeometry =
        deserialize_or_default(geometry_js, "Invalid fretboard geometry")?;
    let position = parse_position(string_number, fret)?;

    serialize(&geometry.position_center(position), "Failed to serialize point")
}

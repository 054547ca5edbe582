//! WASM API test
//!
//! Exercises the JavaScript-facing functions in a browser. Native builds
//! skip this file; the same logic is covered by the native tests.

#![cfg(target_arch = "wasm32")]

use fretboard_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_position_to_midi() {
    assert_eq!(position_to_midi(6, 0).unwrap(), 40);
    assert_eq!(position_to_midi(1, 24).unwrap(), 88);
    assert!(position_to_midi(7, 0).is_err());
    assert!(position_to_midi(1, 25).is_err());
}

#[wasm_bindgen_test]
fn test_staff_hit_test_defaults() {
    assert_eq!(staff_hit_test(70.0, JsValue::UNDEFINED).unwrap(), Some(71));
    assert_eq!(staff_hit_test(190.0, JsValue::NULL).unwrap(), Some(50));
    assert_eq!(staff_hit_test(130.0, JsValue::UNDEFINED).unwrap(), None);
}

#[wasm_bindgen_test]
fn test_scale_positions_round_trip_through_js() {
    let boxes = scale_positions("A", "Minor Pentatonic").unwrap();
    let boxes: Vec<fretboard_wasm::FingeringSequence> = serde_wasm_bindgen::from_value(boxes).unwrap();
    assert_eq!(boxes.len(), 5);

    let tab = render_tab(serde_wasm_bindgen::to_value(&boxes[0]).unwrap()).unwrap();
    assert_eq!(tab.lines().count(), 6);

    assert!(scale_positions("H", "Major").is_err());
    assert!(scale_positions("C", "Nope").is_err());
}

#[wasm_bindgen_test]
fn test_export_run_midi() {
    let bytes = export_run_midi("E", "Major Pentatonic", None).unwrap();
    assert_eq!(&bytes[0..4], b"MThd");
}

#[wasm_bindgen_test]
fn test_quiz_controller_run() {
    let mut quiz = QuizController::new();
    quiz.start(JsValue::UNDEFINED).unwrap();

    for _ in 0..10 {
        let outcome = quiz.submit("H").unwrap();
        let outcome: fretboard_wasm::quiz::SubmitOutcome = serde_wasm_bindgen::from_value(outcome).unwrap();
        assert!(!outcome.correct);
        assert!(quiz.advance(outcome.advance_token));
    }

    assert!(!quiz.qualifies_for_high_score());
    let entry = quiz.record_score("abc").unwrap();
    assert!(entry.is_undefined() || entry.is_null());
    quiz.reset();
}

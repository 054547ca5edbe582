//! Staff and fretboard hit-testing with the default page geometry

use fretboard_wasm::layout::{FretboardGeometry, StaffGeometry};
use fretboard_wasm::models::{GuitarString, Pitch};

#[test]
fn test_staff_centers_and_gap() {
    let staff = StaffGeometry::default();

    assert_eq!(staff.hit_test(70.0), Some(Pitch(71)));
    assert_eq!(staff.hit_test(190.0), Some(Pitch(50)));
    assert_eq!(staff.hit_test(130.0), None);
}

#[test]
fn test_staff_steps_are_semitones() {
    let staff = StaffGeometry::default();

    assert_eq!(staff.hit_test(60.0), Some(Pitch(72)));
    assert_eq!(staff.hit_test(80.0), Some(Pitch(70)));
    assert_eq!(staff.hit_test(200.0), Some(Pitch(49)));
}

#[test]
fn test_staff_clicks_clamp_to_guitar_range() {
    let staff = StaffGeometry::default();
    assert_eq!(staff.hit_test(20.0), Some(Pitch(76)));
    assert_eq!(staff.hit_test(240.0), Some(Pitch(45)));

    // Tight steps reach past the guitar's range at the band edges
    let tight = StaffGeometry {
        step_px: 2.0,
        ..StaffGeometry::default()
    };
    assert_eq!(tight.hit_test(20.0), Some(Pitch(88)));
    assert_eq!(tight.hit_test(240.0), Some(Pitch(40)));
}

#[test]
fn test_note_head_lands_where_it_was_clicked() {
    let staff = StaffGeometry::default();

    for y in [30.0, 70.0, 110.0, 150.0, 190.0] {
        let pitch = staff.hit_test(y).unwrap();
        assert_eq!(staff.hit_test(staff.pitch_to_y(pitch)), Some(pitch));
    }
}

#[test]
fn test_fretboard_click_round_trip() {
    let board = FretboardGeometry::default();

    for string in GuitarString::high_to_low() {
        for fret in [0, 1, 5, 12, 24] {
            let position = fretboard_wasm::FretPosition::new(string, fret).unwrap();
            let center = board.position_center(position);
            assert_eq!(board.hit_test(center.x, center.y), Some(position));
        }
    }
}

//! Fretboard diagram geometry
//!
//! Strings are horizontal lines, string 1 on top. Open strings are clicked
//! in the cell left of the nut; fret N is the cell between wires N-1 and N.

use serde::{Deserialize, Serialize};

use crate::models::guitar::{FretPosition, GuitarString, MAX_FRET, STRING_COUNT};

/// A point in SVG pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FretboardGeometry {
    /// x of the nut line
    pub nut_x: f64,
    pub fret_spacing: f64,
    /// y of string 1
    pub top_y: f64,
    pub string_spacing: f64,
    pub fret_count: u8,
}

impl Default for FretboardGeometry {
    fn default() -> Self {
        Self {
            nut_x: 60.0,
            fret_spacing: 50.0,
            top_y: 30.0,
            string_spacing: 24.0,
            fret_count: MAX_FRET,
        }
    }
}

impl FretboardGeometry {
    /// Position under a click, snapping to the nearest string
    pub fn hit_test(&self, x: f64, y: f64) -> Option<FretPosition> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }

        let row = ((y - self.top_y) / self.string_spacing).round();
        if row < 0.0 || row >= STRING_COUNT as f64 {
            return None;
        }

        let fret = if x <= self.nut_x {
            if x < self.nut_x - self.fret_spacing {
                return None;
            }
            0
        } else {
            ((x - self.nut_x) / self.fret_spacing).ceil() as i32
        };

        if fret > self.fret_count.min(MAX_FRET) as i32 {
            return None;
        }

        let string = GuitarString::from_index(row as usize).ok()?;
        FretPosition::new(string, fret).ok()
    }

    /// Center of the cell where a position's marker is drawn
    pub fn position_center(&self, position: FretPosition) -> Point {
        let x = if position.fret == 0 {
            self.nut_x - self.fret_spacing / 2.0
        } else {
            self.nut_x + (position.fret as f64 - 0.5) * self.fret_spacing
        };
        let y = self.top_y + position.string.index() as f64 * self.string_spacing;

        Point { x, y }
    }
}

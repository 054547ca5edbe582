//! Grand staff hit-testing
//!
//! Maps a click on the two-staff (treble + bass) drawing back to a pitch.
//! Each step of `step_px` away from a staff's center line counts as one
//! semitone. This is not diatonic staff spacing; the note finder has always
//! behaved this way and callers rely on it.

use serde::{Deserialize, Serialize};

use crate::models::Pitch;

/// A horizontal band of the drawing belonging to one staff
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffBand {
    pub top: f64,
    pub bottom: f64,
    pub center_y: f64,
    pub center_pitch: i32,
}

impl StaffBand {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y <= self.bottom
    }

    fn pitch_at(&self, y: f64, step_px: f64) -> Pitch {
        let steps = (y - self.center_y) / step_px;
        Pitch((self.center_pitch as f64 - steps).round() as i32)
    }

    fn y_of(&self, pitch: Pitch, step_px: f64) -> f64 {
        self.center_y - (pitch.midi() - self.center_pitch) as f64 * step_px
    }
}

/// Geometry of the rendered grand staff, in SVG pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffGeometry {
    pub treble: StaffBand,
    pub bass: StaffBand,
    pub step_px: f64,
}

impl Default for StaffGeometry {
    fn default() -> Self {
        Self {
            treble: StaffBand {
                top: 20.0,
                bottom: 120.0,
                center_y: 70.0,
                center_pitch: 71, // B4
            },
            bass: StaffBand {
                top: 140.0,
                bottom: 240.0,
                center_y: 190.0,
                center_pitch: 50, // D3
            },
            step_px: 10.0,
        }
    }
}

impl StaffGeometry {
    /// Pitch under a click at height `y`, or `None` between/outside staves
    pub fn hit_test(&self, y: f64) -> Option<Pitch> {
        let band = if self.treble.contains(y) {
            &self.treble
        } else if self.bass.contains(y) {
            &self.bass
        } else {
            return None;
        };

        Some(band.pitch_at(y, self.step_px).clamp_to_range())
    }

    /// Height at which to draw `pitch` (treble from middle C up)
    pub fn pitch_to_y(&self, pitch: Pitch) -> f64 {
        let band = if pitch.midi() >= 60 { &self.treble } else { &self.bass };
        band.y_of(pitch, self.step_px)
    }
}

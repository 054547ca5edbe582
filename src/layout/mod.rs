//! Diagram geometry
//!
//! Pixel ↔ pitch and pixel ↔ position conversions for the staff and the
//! fretboard drawings. Drawing itself happens in JavaScript.

pub mod fretboard;
pub mod staff;

pub use fretboard::{FretboardGeometry, Point};
pub use staff::{StaffBand, StaffGeometry};

//! Fretboard WASM Module
//!
//! Music-theory engine behind the guitar fretboard pages: pitch naming,
//! scale tables, fingering positions, staff and fretboard hit-testing and the
//! note-identification quiz. Drawing and audio stay in JavaScript.

pub mod errors;
pub mod models;
pub mod scales;
pub mod positions;
pub mod layout;
pub mod quiz;
pub mod renderers;
pub mod api;

// Re-export commonly used types
pub use errors::{ExportError, QuizError, StorageError, TheoryError};
pub use models::{FingeringNote, FingeringSequence, FretPosition, GuitarString, Key, Pitch};
pub use scales::{find_scale, Scale};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logging();

    log::info!("Fretboard WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        wasm_warn!("logger already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}

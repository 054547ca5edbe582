//! Fretboard engine WASM API
//!
//! This module provides the JavaScript-facing API for the fretboard pages.
//! It includes shared utilities for serialization, argument parsing, error
//! handling and logging, and the API functions organized by domain.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization, error handling, and logging
//! - `theory`: Pitch names, scale tables, position sets and runs
//! - `position`: Staff and fretboard coordinate conversions
//! - `export`: Tablature, playback schedules and MIDI export
//! - `quiz`: The `QuizController` class

pub mod helpers;
pub mod types;
pub mod theory;
pub mod position;
pub mod export;
pub mod quiz;

// Re-export all public functions to keep a flat public API
pub use theory::{pitch_names, pitch_info, position_to_midi, positions_for_midi, scale_names, key_names, root_fret, scale_positions, scale_run};
pub use position::{staff_hit_test, staff_pitch_to_y, fretboard_hit_test, fretboard_position_center};
pub use export::{render_tab, playback_schedule, note_event, fade_out_seconds, export_run_midi};
pub use quiz::QuizController;

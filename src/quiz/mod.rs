//! Timed note-identification quiz
//!
//! - `settings`: string/fret range and spelling options
//! - `question`: question pool and random draw
//! - `answer`: answer normalization and enharmonic acceptance
//! - `session`: the per-run state machine
//! - `high_scores`: the persisted top-10 ledger

pub mod answer;
pub mod defaults;
pub mod high_scores;
pub mod question;
pub mod session;
pub mod settings;

pub use answer::{is_correct, normalize_answer};
pub use high_scores::{HighScoreLedger, LocalStorageScoreStore, MemoryScoreStore, ScoreEntry, ScoreStore};
pub use question::QuizQuestion;
pub use session::{QuizSession, QuizSnapshot, QuizState, SubmitOutcome};
pub use settings::{QuizSettings, StringRange};

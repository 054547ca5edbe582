//! Default values for the note quiz

/// Questions per quiz run
pub const QUESTION_COUNT: usize = 10;

/// Pause between answering and the next question, in milliseconds
pub const ADVANCE_DELAY_MS: u32 = 1200;

/// Entries kept in the high-score ledger
pub const HIGH_SCORE_LIMIT: usize = 10;

/// Length of the initials typed into the ledger
pub const INITIALS_LEN: usize = 3;

/// Name used when no initials are entered
pub const DEFAULT_INITIALS: &str = "---";

/// Local storage key holding the ledger as JSON
pub const HIGH_SCORE_STORAGE_KEY: &str = "fretboard.quiz.highScores";

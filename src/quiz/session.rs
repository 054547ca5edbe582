//! Quiz session state machine
//!
//! `Idle → InProgress → Scored → InProgress → … → Complete → Recorded`.
//!
//! Timers belong to the page: it calls `tick` while a question is open and
//! calls `advance` with the token from `submit` once the pause is over.
//! `reset` invalidates outstanding tokens, so a late timer callback cannot
//! move a session that has been restarted.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::QuizError;
use crate::quiz::answer::{accepted_answers, is_correct};
use crate::quiz::defaults::{ADVANCE_DELAY_MS, QUESTION_COUNT};
use crate::quiz::high_scores::{normalize_initials, HighScoreLedger, ScoreEntry, ScoreStore};
use crate::quiz::question::{generate_questions, QuizQuestion};
use crate::quiz::settings::QuizSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizState {
    Idle,
    /// A question is open and answers are accepted
    InProgress,
    /// The current question has been answered; waiting to advance
    Scored,
    Complete,
    /// Complete and the score has been written to the ledger
    Recorded,
}

/// Result of answering a question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOutcome {
    pub correct: bool,
    pub accepted: Vec<String>,
    pub score: u32,
    pub question_index: usize,
    pub is_last: bool,
    pub advance_token: u32,
    pub advance_delay_ms: u32,
}

/// Serializable view of a session for the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSnapshot {
    pub state: QuizState,
    pub question_index: usize,
    pub question_count: usize,
    pub score: u32,
    pub elapsed_ms: f64,
    pub question: Option<QuizQuestion>,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    settings: QuizSettings,
    questions: Vec<QuizQuestion>,
    index: usize,
    score: u32,
    elapsed_ms: f64,
    state: QuizState,
    advance_token: u32,
    results: Vec<bool>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            settings: QuizSettings::default(),
            questions: Vec::new(),
            index: 0,
            score: 0,
            elapsed_ms: 0.0,
            state: QuizState::Idle,
            advance_token: 0,
            results: Vec::new(),
        }
    }

    /// Build a fresh question list and open the first question
    pub fn start<R: Rng + ?Sized>(&mut self, settings: QuizSettings, rng: &mut R) -> Result<(), QuizError> {
        let questions = generate_questions(&settings, rng, QUESTION_COUNT)?;

        self.reset();
        self.settings = settings;
        self.questions = questions;
        self.state = QuizState::InProgress;

        log::info!("quiz started: {} questions", self.questions.len());
        Ok(())
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn question_index(&self) -> usize {
        self.index
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    /// Per-question correctness so far
    pub fn results(&self) -> &[bool] {
        &self.results
    }

    pub fn is_accepting(&self) -> bool {
        self.state == QuizState::InProgress
    }

    /// The question on screen, while one is open or being scored
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.state {
            QuizState::InProgress | QuizState::Scored => self.questions.get(self.index),
            _ => None,
        }
    }

    /// Answer the open question; ignored unless answers are accepted
    pub fn submit(&mut self, answer: &str) -> Option<SubmitOutcome> {
        if !self.is_accepting() {
            log::debug!("quiz: answer ignored in state {:?}", self.state);
            return None;
        }

        let question = self.questions.get(self.index)?;
        let correct = is_correct(answer, question, &self.settings);
        let accepted = accepted_answers(question, &self.settings);

        if correct {
            self.score += 1;
        }
        self.results.push(correct);
        self.state = QuizState::Scored;
        self.advance_token = self.advance_token.wrapping_add(1);

        Some(SubmitOutcome {
            correct,
            accepted,
            score: self.score,
            question_index: self.index,
            is_last: self.index + 1 >= self.questions.len(),
            advance_token: self.advance_token,
            advance_delay_ms: ADVANCE_DELAY_MS,
        })
    }

    /// Move past a scored question. Stale tokens are ignored.
    pub fn advance(&mut self, token: u32) -> bool {
        if self.state != QuizState::Scored || token != self.advance_token {
            return false;
        }

        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.state = QuizState::InProgress;
        } else {
            self.state = QuizState::Complete;
            log::info!("quiz complete: {}/{}", self.score, self.questions.len());
        }
        true
    }

    /// Add elapsed time; the clock only runs while a question is open
    pub fn tick(&mut self, delta_ms: f64) {
        if self.state == QuizState::InProgress && delta_ms > 0.0 {
            self.elapsed_ms += delta_ms;
        }
    }

    /// Write a finished run into the ledger
    ///
    /// Only a complete run with a score above zero is recorded, once.
    pub fn record_score<S: ScoreStore>(
        &mut self,
        initials: &str,
        date: &str,
        ledger: &mut HighScoreLedger<S>,
    ) -> Option<ScoreEntry> {
        if self.state != QuizState::Complete || self.score == 0 {
            return None;
        }

        let entry = ScoreEntry {
            name: normalize_initials(initials),
            score: self.score,
            date: date.to_string(),
        };
        ledger.add(entry.clone());
        self.state = QuizState::Recorded;

        Some(entry)
    }

    /// Back to idle from any state
    pub fn reset(&mut self) {
        self.questions.clear();
        self.results.clear();
        self.index = 0;
        self.score = 0;
        self.elapsed_ms = 0.0;
        self.state = QuizState::Idle;
        self.advance_token = self.advance_token.wrapping_add(1);
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            state: self.state,
            question_index: self.index,
            question_count: self.questions.len(),
            score: self.score,
            elapsed_ms: self.elapsed_ms,
            question: self.current_question().cloned(),
        }
    }
}

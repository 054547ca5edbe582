//! Quiz controller for the WASM API
//!
//! The page constructs one `QuizController` and owns it. Timers stay in
//! JavaScript: after `submit` the page waits `advanceDelayMs` and calls
//! `advance(advanceToken)`; a token from before `reset` is ignored.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize_or_default, serialize, to_js_error};
use crate::quiz::{HighScoreLedger, LocalStorageScoreStore, QuizSession, QuizSettings};
use crate::{wasm_info, wasm_log};

#[wasm_bindgen]
pub struct QuizController {
    session: QuizSession,
    ledger: HighScoreLedger<LocalStorageScoreStore>,
    rng: StdRng,
}

#[wasm_bindgen]
impl QuizController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> QuizController {
        QuizController {
            session: QuizSession::new(),
            ledger: HighScoreLedger::load(LocalStorageScoreStore::default()),
            rng: StdRng::from_entropy(),
        }
    }

    /// Start a run; `settings` may be omitted for the defaults
    pub fn start(&mut self, settings_js: JsValue) -> Result<JsValue, JsValue> {
        let settings: QuizSettings = deserialize_or_default(settings_js, "Invalid quiz settings")?;
        wasm_info!("quiz start: {:?}", settings);

        self.session
            .start(settings, &mut self.rng)
            .map_err(to_js_error)?;
        self.snapshot()
    }

    /// Answer the open question; `undefined` when answers are not accepted
    pub fn submit(&mut self, answer: &str) -> Result<JsValue, JsValue> {
        let outcome = self.session.submit(answer);
        if let Some(outcome) = &outcome {
            wasm_log!("quiz answer '{}' correct={}", answer, outcome.correct);
        }
        serialize(&outcome, "Failed to serialize answer outcome")
    }

    pub fn advance(&mut self, token: u32) -> bool {
        self.session.advance(token)
    }

    pub fn tick(&mut self, delta_ms: f64) {
        self.session.tick(delta_ms);
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        serialize(&self.session.snapshot(), "Failed to serialize quiz snapshot")
    }

    /// Record a finished run under the given initials; `undefined` if not recorded
    #[wasm_bindgen(js_name = recordScore)]
    pub fn record_score(&mut self, initials: &str) -> Result<JsValue, JsValue> {
        let date: String = js_sys::Date::new_0().to_iso_string().into();
        let entry = self.session.record_score(initials, &date, &mut self.ledger);
        serialize(&entry, "Failed to serialize score entry")
    }

    #[wasm_bindgen(js_name = highScores)]
    pub fn high_scores(&self) -> Result<JsValue, JsValue> {
        serialize(&self.ledger.entries(), "Failed to serialize high scores")
    }

    /// Whether the finished run would make the top ten
    #[wasm_bindgen(js_name = qualifiesForHighScore)]
    pub fn qualifies_for_high_score(&self) -> bool {
        self.ledger.qualifies(self.session.score())
    }
}

impl Default for QuizController {
    fn default() -> Self {
        Self::new()
    }
}

//! Translation pipeline: question → normalized text → intent → slots → SQL.
//!
//! Pure and stateless apart from the injected [`Clock`]; safe to share across
//! threads and call concurrently.

use crate::core::clock::{Clock, SystemClock};
use crate::core::error::TranslationError;
use crate::core::question::Question;
use crate::intent::{Intent, match_intent};
use crate::slot::SlotSet;
use crate::sql::{RenderedQuery, render};

/// Rule-based question-to-SQL translator.
#[derive(Debug, Clone, Default)]
pub struct Translator<C: Clock = SystemClock> {
    clock: C,
}

impl Translator<SystemClock> {
    /// Translator that reads the current year from the wall clock
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> Translator<C> {
    /// Translator with an explicit clock (tests pin the year with `FixedClock`)
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Select the intent of a question without rendering anything
    pub fn classify(&self, question: &str) -> Intent {
        match_intent(&Question::new(question).normalize())
    }

    /// Translate, keeping the reason on failure
    pub fn try_translate(&self, question: &str) -> Result<RenderedQuery, TranslationError> {
        self.translate_question(&Question::new(question))
    }

    /// [`Self::try_translate`] for an already constructed [`Question`]
    pub fn translate_question(&self, question: &Question) -> Result<RenderedQuery, TranslationError> {
        let normalized = question.normalize();
        let intent = match_intent(&normalized);
        if !intent.is_known() {
            return Err(TranslationError::UnparseableQuestion);
        }
        let slots = SlotSet::extract(&normalized, self.clock.current_year());
        render(intent, &slots)
    }

    /// Translate to SQL; `None` means the question cannot be answered
    pub fn translate(&self, question: &str) -> Option<String> {
        self.try_translate(question).ok().map(RenderedQuery::into_sql)
    }
}

/// Translate with the wall clock; `None` means the question cannot be answered.
pub fn translate(question: &str) -> Option<String> {
    Translator::new().translate(question)
}

//! Domain error types

use crate::intent::Intent;
use crate::slot::SlotKind;
use thiserror::Error;

/// Why a question could not be turned into SQL.
///
/// Both variants collapse to the same "unanswerable" signal at the public
/// boundary; they stay distinct here so callers and tests can tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    #[error("No intent rule matched the question")]
    UnparseableQuestion,

    #[error("Intent {intent} matched but the {slot} could not be extracted")]
    IncompleteSlots { intent: Intent, slot: SlotKind },
}

impl TranslationError {
    /// Check if the question was recognized at all
    pub fn is_unparseable(&self) -> bool {
        matches!(self, TranslationError::UnparseableQuestion)
    }
}

//! Port for structured query logging.
//!
//! Defines the [`QueryLogger`] trait for recording what happened to each
//! question (intent, generated SQL, execution outcome) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port keeps a
//! machine-readable audit trail (JSONL).

use nl2sql_domain::{Intent, TranslationError};
use serde::Serialize;

/// One step in answering a question.
///
/// Serialized with a `type` tag in snake case (`translated`,
/// `unanswerable`, `executed`, `execution_failed`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueryEvent {
    /// An intent matched and SQL was rendered
    Translated {
        question: String,
        intent: Intent,
        sql: String,
    },
    /// No SQL could be generated
    Unanswerable {
        question: String,
        /// No rule matched, as opposed to a matched rule missing a slot
        unparseable: bool,
        reason: String,
    },
    /// The executor returned a result set
    Executed {
        intent: Intent,
        rows: usize,
        columns: Vec<String>,
        elapsed_ms: u64,
    },
    /// The executor rejected the SQL
    ExecutionFailed {
        intent: Intent,
        error: String,
        elapsed_ms: u64,
    },
}

impl QueryEvent {
    pub fn unanswerable(question: &str, reason: &TranslationError) -> Self {
        QueryEvent::Unanswerable {
            question: question.to_string(),
            unparseable: reason.is_unparseable(),
            reason: reason.to_string(),
        }
    }

    /// Whether this step succeeded
    pub fn is_ok(&self) -> bool {
        matches!(
            self,
            QueryEvent::Translated { .. } | QueryEvent::Executed { .. }
        )
    }

    /// The intent involved, if one matched
    pub fn intent(&self) -> Option<Intent> {
        match self {
            QueryEvent::Translated { intent, .. }
            | QueryEvent::Executed { intent, .. }
            | QueryEvent::ExecutionFailed { intent, .. } => Some(*intent),
            QueryEvent::Unanswerable { .. } => None,
        }
    }
}

/// Port for logging query events.
///
/// `log` is synchronous and infallible; a failed write is dropped.
pub trait QueryLogger: Send + Sync {
    fn log(&self, event: &QueryEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoQueryLogger;

impl QueryLogger for NoQueryLogger {
    fn log(&self, _event: &QueryEvent) {}
}

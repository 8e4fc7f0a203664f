//! Progress notification port
//!
//! Defines the interface for reporting progress while the evaluator works
//! through a gold set.

use crate::use_cases::evaluate::CaseOutcome;

/// Callback for progress updates during an evaluation run
///
/// Implementations live in the presentation layer.
pub trait EvaluationProgress: Send + Sync {
    /// Called once before the first case
    fn on_start(&self, total_cases: usize);

    /// Called after each case is scored
    fn on_case_complete(&self, question: &str, outcome: &CaseOutcome);

    /// Called after the last case
    fn on_finish(&self) {}
}

/// No-op progress for when reporting is not needed
pub struct NoProgress;

impl EvaluationProgress for NoProgress {
    fn on_start(&self, _total_cases: usize) {}
    fn on_case_complete(&self, _question: &str, _outcome: &CaseOutcome) {}
}

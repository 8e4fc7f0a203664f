//! Application layer for rental-nl2sql
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::DisplayParams;
pub use ports::{
    progress::{EvaluationProgress, NoProgress},
    query_executor::{QueryExecutionError, QueryExecutorPort},
    query_logger::{NoQueryLogger, QueryEvent, QueryLogger},
};
pub use use_cases::answer_question::{APOLOGY, Answer, AnswerQuestionUseCase};
pub use use_cases::evaluate::{
    CaseOutcome, CaseResult, EvalCase, EvaluateUseCase, EvaluationReport,
};

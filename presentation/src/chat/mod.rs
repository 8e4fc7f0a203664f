//! Interactive question mode
//!
//! Provides a readline-based interface that answers one question per line.

mod repl;

pub use repl::QuestionRepl;

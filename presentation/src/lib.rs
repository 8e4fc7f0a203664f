//! Presentation layer for rental-nl2sql
//!
//! This crate contains CLI definitions, output formatters,
//! the evaluation progress reporter and the interactive question mode.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::QuestionRepl;
pub use cli::SAMPLE_QUESTIONS;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::{
    FormattedResult, NO_RESULTS, OutputFormatter, TRUNCATION_MARKER, format_result,
};
pub use output::formatter_for;
pub use output::json::JsonFormatter;
pub use progress::reporter::ProgressReporter;

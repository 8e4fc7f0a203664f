//! Output formatting

pub mod console;
pub mod formatter;
pub mod json;

use nl2sql_domain::OutputFormat;

/// Formatter for the configured output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn formatter::OutputFormatter + Send + Sync> {
    match format {
        OutputFormat::Table => Box::new(console::ConsoleFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}

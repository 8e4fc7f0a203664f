//! Output format value object

use serde::{Deserialize, Serialize};

/// How answers are rendered
///
/// This is a domain concept shared by the config file and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table (default)
    Table,
    /// JSON object with the SQL and the rows
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Table
    }
}

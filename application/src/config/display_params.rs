//! Display parameters: how answers are presented.

use serde::{Deserialize, Serialize};

/// Presentation controls shared by the one-shot CLI and the REPL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayParams {
    /// Maximum number of rows rendered before the truncation marker.
    pub max_rows: usize,
    /// Print the generated SQL above the result.
    pub show_sql: bool,
}

impl Default for DisplayParams {
    fn default() -> Self {
        Self {
            max_rows: 100,
            show_sql: true,
        }
    }
}

impl DisplayParams {
    pub fn with_max_rows(mut self, max: usize) -> Self {
        self.max_rows = max;
        self
    }

    pub fn with_show_sql(mut self, show: bool) -> Self {
        self.show_sql = show;
        self
    }
}

//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use nl2sql_application::DisplayParams;
use nl2sql_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::sqlite::{DatabaseUrl, DatabaseUrlError};

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("database.url is invalid: {0}")]
    InvalidDatabaseUrl(#[from] DatabaseUrlError),

    #[error("app.max_rows cannot be 0")]
    ZeroMaxRows,
}

/// Raw database configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatabaseConfig {
    /// SQLite URL (`sqlite:///rental_app.db`) or plain path
    pub url: String,
}

impl Default for FileDatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:///rental_app.db".to_string(),
        }
    }
}

/// Raw application behavior configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAppConfig {
    /// Rows rendered before the truncation marker
    pub max_rows: usize,
    /// Echo the generated SQL with each answer
    pub show_sql: bool,
}

impl Default for FileAppConfig {
    fn default() -> Self {
        let display = DisplayParams::default();
        Self {
            max_rows: display.max_rows,
            show_sql: display.show_sql,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL audit log of translations and executions; disabled when unset
    pub query_log: Option<PathBuf>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub database: FileDatabaseConfig,
    pub app: FileAppConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.database_url()?;
        if self.app.max_rows == 0 {
            return Err(ConfigValidationError::ZeroMaxRows);
        }
        Ok(())
    }

    pub fn database_url(&self) -> Result<DatabaseUrl, DatabaseUrlError> {
        DatabaseUrl::parse(&self.database.url)
    }

    pub fn display_params(&self) -> DisplayParams {
        DisplayParams::default()
            .with_max_rows(self.app.max_rows)
            .with_show_sql(self.app.show_sql)
    }
}

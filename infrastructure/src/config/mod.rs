//! Configuration file loading for rental-nl2sql
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed `NL2SQL_` (`NL2SQL_DATABASE__URL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./rental-nl2sql.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/rental-nl2sql/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAppConfig, FileConfig, FileDatabaseConfig, FileLoggingConfig,
    FileOutputConfig,
};
pub use loader::ConfigLoader;

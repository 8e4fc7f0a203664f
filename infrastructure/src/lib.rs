//! Infrastructure layer for rental-nl2sql
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading,
//! database bootstrap and gold-set loading.

pub mod config;
pub mod evaluation;
pub mod logging;
pub mod sqlite;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAppConfig, FileConfig, FileDatabaseConfig,
    FileLoggingConfig, FileOutputConfig,
};
pub use evaluation::{GoldSetError, load_gold_set};
pub use logging::JsonlQueryLogger;
pub use sqlite::{
    BUNDLED_SCHEMA, BUNDLED_SEED, DatabaseUrl, DatabaseUrlError, InitDbError,
    SqliteQueryExecutor, init_database, init_database_from_files,
};

//! SQLite adapters: URL parsing, per-query executor, database bootstrap.

mod executor;
mod init;
mod url;

pub use executor::SqliteQueryExecutor;
pub use init::{BUNDLED_SCHEMA, BUNDLED_SEED, InitDbError, init_database, init_database_from_files};
pub use url::{DatabaseUrl, DatabaseUrlError};

//! Database bootstrap from a schema script and a seed script.

use rusqlite::Connection;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Schema shipped with the workspace (`data/rental_app_schema.sql`).
pub const BUNDLED_SCHEMA: &str = include_str!("../../../data/rental_app_schema.sql");

/// Sample rows shipped with the workspace (`data/seed_data.sql`).
pub const BUNDLED_SEED: &str = include_str!("../../../data/seed_data.sql");

#[derive(Debug, Error)]
pub enum InitDbError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to prepare database file: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Build a fresh database at `path`, replacing any existing file.
///
/// The schema and the seed run in a single transaction, so a failing seed
/// leaves an empty database rather than a half-populated one.
pub fn init_database(path: &Path, schema_sql: &str, seed_sql: &str) -> Result<(), InitDbError> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut conn = Connection::open(path)?;
    let tx = conn.transaction()?;
    tx.execute_batch(schema_sql)?;
    tx.execute_batch(seed_sql)?;
    tx.commit()?;

    info!("Initialized database at {}", path.display());
    Ok(())
}

/// [`init_database`] with scripts read from disk, falling back to the
/// bundled schema and seed for any path not given.
pub fn init_database_from_files(
    path: &Path,
    schema_path: Option<&Path>,
    seed_path: Option<&Path>,
) -> Result<(), InitDbError> {
    let schema = read_script(schema_path, BUNDLED_SCHEMA)?;
    let seed = read_script(seed_path, BUNDLED_SEED)?;
    init_database(path, &schema, &seed)
}

fn read_script(path: Option<&Path>, bundled: &str) -> Result<String, InitDbError> {
    let Some(path) = path else {
        return Ok(bundled.to_string());
    };
    fs::read_to_string(path).map_err(|source| InitDbError::Read {
        path: path.display().to_string(),
        source,
    })
}

//! Database URL parsing.
//!
//! Accepts the SQLAlchemy-style URLs found in existing configs
//! (`sqlite:///relative.db`, `sqlite:////absolute.db`, `sqlite://` for
//! memory) as well as bare filesystem paths.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatabaseUrlError {
    #[error("database url is empty")]
    Empty,

    #[error("unsupported database scheme '{0}' (only sqlite is supported)")]
    UnsupportedScheme(String),
}

/// Location of a SQLite database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    File(PathBuf),
    Memory,
}

impl DatabaseUrl {
    pub fn parse(raw: &str) -> Result<Self, DatabaseUrlError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DatabaseUrlError::Empty);
        }

        let Some((scheme, rest)) = raw.split_once("://") else {
            return Ok(match raw {
                ":memory:" | "sqlite::memory:" => DatabaseUrl::Memory,
                path => DatabaseUrl::File(PathBuf::from(path)),
            });
        };

        if scheme != "sqlite" {
            return Err(DatabaseUrlError::UnsupportedScheme(scheme.to_string()));
        }

        // Drop connection options such as `?mode=ro`.
        let rest = rest.split_once('?').map_or(rest, |(path, _)| path);
        let path = rest.strip_prefix('/').unwrap_or(rest);
        Ok(match path {
            "" | ":memory:" => DatabaseUrl::Memory,
            path => DatabaseUrl::File(PathBuf::from(path)),
        })
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            DatabaseUrl::File(path) => Some(path),
            DatabaseUrl::Memory => None,
        }
    }
}

impl std::str::FromStr for DatabaseUrl {
    type Err = DatabaseUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseUrl::File(path) => write!(f, "sqlite:///{}", path.display()),
            DatabaseUrl::Memory => f.write_str("sqlite://"),
        }
    }
}

//! Append-only JSONL audit log of answered questions.
//!
//! Every [`QueryEvent`] becomes one line: the event's own fields plus
//! `timestamp`, `session`, `seq` and `ok`. `session` identifies one process
//! run so that the lines of concurrent or successive runs sharing a file can
//! be told apart; `seq` orders the lines within a session.

use chrono::{SecondsFormat, Utc};
use nl2sql_application::ports::query_logger::{QueryEvent, QueryLogger};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

#[derive(Serialize)]
struct LogRecord<'a> {
    timestamp: String,
    session: &'a str,
    seq: u64,
    ok: bool,
    #[serde(flatten)]
    event: &'a QueryEvent,
}

/// [`QueryLogger`] that appends to a JSONL file.
///
/// Each record is written with a single `write_all`, so there is no buffered
/// state to flush and a crash loses at most the line being written.
pub struct JsonlQueryLogger {
    file: Mutex<File>,
    path: PathBuf,
    session: String,
    seq: AtomicU64,
}

impl JsonlQueryLogger {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(file),
            path: path.to_path_buf(),
            session: format!(
                "{}-{}",
                Utc::now().format("%Y%m%dT%H%M%S%.3fZ"),
                std::process::id()
            ),
            seq: AtomicU64::new(0),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn session(&self) -> &str {
        &self.session
    }

    fn encode(&self, event: &QueryEvent) -> serde_json::Result<Vec<u8>> {
        let record = LogRecord {
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            session: &self.session,
            seq: self.seq.fetch_add(1, Ordering::Relaxed),
            ok: event.is_ok(),
            event,
        };
        let mut line = serde_json::to_vec(&record)?;
        line.push(b'\n');
        Ok(line)
    }
}

impl QueryLogger for JsonlQueryLogger {
    fn log(&self, event: &QueryEvent) {
        let line = match self.encode(event) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not encode query event: {}", e);
                return;
            }
        };
        let Ok(mut file) = self.file.lock() else {
            return;
        };
        if let Err(e) = file.write_all(&line) {
            warn!("Could not write query log {}: {}", self.path.display(), e);
        }
    }
}

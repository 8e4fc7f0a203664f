//! Gold-set loading: a JSON array of `{question, gold_sql}` objects.

use nl2sql_application::EvalCase;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GoldSetError {
    #[error("Failed to read gold set {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Gold set {path} is not a valid list of {{question, gold_sql}}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

pub fn load_gold_set(path: &Path) -> Result<Vec<EvalCase>, GoldSetError> {
    let content = std::fs::read_to_string(path).map_err(|source| GoldSetError::Read {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| GoldSetError::Parse {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_gold_set_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/gold_set.json");
        let cases = load_gold_set(&path).unwrap();
        assert_eq!(cases.len(), 7);
        assert!(cases.iter().all(|c| !c.gold_sql.trim().is_empty()));
    }

    #[tokio::test]
    async fn test_bundled_gold_set_scores_against_seed() {
        use crate::sqlite::{BUNDLED_SCHEMA, BUNDLED_SEED, DatabaseUrl, SqliteQueryExecutor, init_database};
        use nl2sql_application::{CaseOutcome, EvaluateUseCase};
        use nl2sql_domain::{FixedClock, Translator};
        use std::sync::Arc;

        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("rental_app.db");
        init_database(&db, BUNDLED_SCHEMA, BUNDLED_SEED).unwrap();
        let executor = Arc::new(SqliteQueryExecutor::new(DatabaseUrl::File(db)));
        let evaluator =
            EvaluateUseCase::with_translator(executor, Translator::with_clock(FixedClock(2024)));

        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/gold_set.json");
        let report = evaluator.execute(&load_gold_set(&path).unwrap()).await;

        assert_eq!(report.total, 7);
        assert_eq!(report.correct, 6);
        assert_eq!(report.accuracy, 85.71);
        assert_eq!(report.details[6].outcome, CaseOutcome::ParseFailure);
    }

    #[test]
    fn test_rejects_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gold.json");
        std::fs::write(&path, r#"[{"question": "top tenants"}]"#).unwrap();

        let err = load_gold_set(&path).unwrap_err();
        assert!(matches!(err, GoldSetError::Parse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_gold_set(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, GoldSetError::Read { .. }));
    }
}

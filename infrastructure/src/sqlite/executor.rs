//! SQLite adapter for [`QueryExecutorPort`].

use super::url::{DatabaseUrl, DatabaseUrlError};
use async_trait::async_trait;
use nl2sql_application::ports::query_executor::{QueryExecutionError, QueryExecutorPort};
use nl2sql_domain::{CellValue, ResultTable};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use tracing::debug;

/// Runs each query on its own short-lived connection.
///
/// The connection is opened inside `spawn_blocking` and dropped when the
/// blocking closure returns, whether the query succeeded or not.
#[derive(Debug, Clone)]
pub struct SqliteQueryExecutor {
    url: DatabaseUrl,
}

impl SqliteQueryExecutor {
    pub fn new(url: DatabaseUrl) -> Self {
        Self { url }
    }

    pub fn from_url(url: &str) -> Result<Self, DatabaseUrlError> {
        DatabaseUrl::parse(url).map(Self::new)
    }

    pub fn url(&self) -> &DatabaseUrl {
        &self.url
    }
}

#[async_trait]
impl QueryExecutorPort for SqliteQueryExecutor {
    async fn run(&self, sql: &str) -> Result<ResultTable, QueryExecutionError> {
        let url = self.url.clone();
        let sql = sql.to_string();
        tokio::task::spawn_blocking(move || run_query(&url, &sql))
            .await
            .map_err(|e| QueryExecutionError::Task(e.to_string()))?
    }
}

fn open(url: &DatabaseUrl) -> Result<Connection, QueryExecutionError> {
    let conn = match url {
        // No SQLITE_OPEN_CREATE: a mistyped path must not yield an empty database.
        DatabaseUrl::File(path) => Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        ),
        DatabaseUrl::Memory => Connection::open_in_memory(),
    };
    conn.map_err(|e| QueryExecutionError::Connection(format!("{url}: {e}")))
}

fn run_query(url: &DatabaseUrl, sql: &str) -> Result<ResultTable, QueryExecutionError> {
    let conn = open(url)?;
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| QueryExecutionError::Prepare(e.to_string()))?;
    let columns: Vec<String> = stmt
        .column_names()
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut rows_iter = stmt
        .query([])
        .map_err(|e| QueryExecutionError::Execution(e.to_string()))?;
    let mut table = ResultTable::new(columns, Vec::new());
    while let Some(row) = rows_iter
        .next()
        .map_err(|e| QueryExecutionError::Execution(e.to_string()))?
    {
        let mut cells = Vec::with_capacity(table.column_count());
        for idx in 0..table.column_count() {
            let value = row
                .get_ref(idx)
                .map_err(|e| QueryExecutionError::Execution(e.to_string()))?;
            cells.push(cell_from_sqlite(value));
        }
        table.push_row(cells);
    }

    debug!(
        "Query returned {} row(s) x {} column(s)",
        table.row_count(),
        table.column_count()
    );
    Ok(table)
}

fn cell_from_sqlite(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(v) => CellValue::Integer(v),
        ValueRef::Real(v) => CellValue::Real(v),
        ValueRef::Text(bytes) => CellValue::Text(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => CellValue::Text(format!("<blob {} bytes>", bytes.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::init::{BUNDLED_SCHEMA, BUNDLED_SEED, init_database};
    use nl2sql_domain::{FixedClock, Translator};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn seeded() -> (TempDir, SqliteQueryExecutor) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rental_app.db");
        init_database(&path, BUNDLED_SCHEMA, BUNDLED_SEED).unwrap();
        let executor = SqliteQueryExecutor::new(DatabaseUrl::File(path));
        (dir, executor)
    }

    #[tokio::test]
    async fn test_reads_columns_and_typed_cells() {
        let (_dir, executor) = seeded();
        let table = executor
            .run("SELECT property_id, title, rent_price, NULL AS note FROM properties WHERE property_id = 1")
            .await
            .unwrap();

        assert_eq!(table.columns(), ["property_id", "title", "rent_price", "note"]);
        assert_eq!(
            table.rows()[0],
            vec![
                CellValue::Integer(1),
                CellValue::text("Riverside Flat"),
                CellValue::Real(2200.0),
                CellValue::Null,
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_result_keeps_columns() {
        let (_dir, executor) = seeded();
        let table = executor
            .run("SELECT title FROM properties WHERE city = 'Atlantis'")
            .await
            .unwrap();
        assert!(table.is_empty());
        assert_eq!(table.columns(), ["title"]);
    }

    #[tokio::test]
    async fn test_syntax_error_is_reported() {
        let (_dir, executor) = seeded();
        let err = executor.run("SELEC * FROM properties").await.unwrap_err();
        assert!(matches!(err, QueryExecutionError::Prepare(_)));

        let err = executor.run("SELECT * FROM no_such_table").await.unwrap_err();
        assert!(matches!(err, QueryExecutionError::Prepare(_)));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");
        let executor = SqliteQueryExecutor::new(DatabaseUrl::File(path.clone()));

        let err = executor.run("SELECT 1").await.unwrap_err();
        assert!(matches!(err, QueryExecutionError::Connection(_)));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_in_memory_database() {
        let executor = SqliteQueryExecutor::from_url("sqlite://").unwrap();
        let table = executor.run("SELECT 42 AS answer").await.unwrap();
        assert_eq!(table.scalar(), Some(&CellValue::Integer(42)));
    }

    #[tokio::test]
    async fn test_sample_questions_against_seed() {
        let (_dir, executor) = seeded();
        let translator = Translator::with_clock(FixedClock(2024));
        let sql = |q: &str| translator.translate(q).unwrap();

        let top = executor
            .run(&sql("Show top 3 tenants by total rent paid"))
            .await
            .unwrap();
        assert_eq!(top.columns(), ["tenant_id", "total_rent"]);
        assert_eq!(top.row_count(), 3);
        assert_eq!(top.rows()[0], vec![CellValue::Integer(4), CellValue::Real(6050.0)]);

        let ratings = executor
            .run(&sql("What is the average rating of apartments vs houses?"))
            .await
            .unwrap();
        assert_eq!(
            ratings.rows(),
            [
                vec![CellValue::text("apartment"), CellValue::Real(4.0)],
                vec![CellValue::text("house"), CellValue::Real(3.67)],
            ]
        );

        let revenue = executor
            .run(&sql("Which landlords generated the most revenue in 2024?"))
            .await
            .unwrap();
        assert_eq!(
            revenue.rows()[0],
            vec![CellValue::text("Brian Patel"), CellValue::Real(7800.0)]
        );
        assert_eq!(revenue.row_count(), 3);

        let available = executor
            .run(&sql("List all currently available 2BHKs under $2500 in London."))
            .await
            .unwrap();
        let titles: Vec<_> = available.rows().iter().map(|r| r[0].clone()).collect();
        assert_eq!(
            titles,
            vec![CellValue::text("Riverside Flat"), CellValue::text("Hackney House")]
        );

        let occupancy = executor
            .run(&sql("What’s the occupancy rate of properties in Bradford in Q2 2024?"))
            .await
            .unwrap();
        assert_eq!(
            occupancy.columns(),
            ["city", "period", "occupancy_rate_percent"]
        );
        assert_eq!(
            occupancy.rows()[0],
            vec![
                CellValue::text("Bradford"),
                CellValue::text("Q2 2024"),
                CellValue::Real(52.01),
            ]
        );
    }

    #[tokio::test]
    async fn test_occupancy_without_matching_properties_is_null() {
        let (_dir, executor) = seeded();
        let sql = Translator::with_clock(FixedClock(2024))
            .translate("occupancy for leeds in q1")
            .unwrap();
        let table = executor.run(&sql).await.unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows()[0][2], CellValue::Null);
    }

    #[test]
    fn test_url_accessor() {
        let executor = SqliteQueryExecutor::from_url("sqlite:///rental_app.db").unwrap();
        assert_eq!(
            executor.url(),
            &DatabaseUrl::File(PathBuf::from("rental_app.db"))
        );
    }
}

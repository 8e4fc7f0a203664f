//! Query Executor port
//!
//! Defines the interface for running generated SQL against the data store.

use async_trait::async_trait;
use nl2sql_domain::ResultTable;
use thiserror::Error;

/// Why a query could not be executed.
///
/// Reported as a value, never as a panic crossing the executor boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryExecutionError {
    #[error("Could not open database: {0}")]
    Connection(String),

    #[error("Invalid SQL: {0}")]
    Prepare(String),

    #[error("Query failed: {0}")]
    Execution(String),

    #[error("Executor task failed: {0}")]
    Task(String),
}

/// Port for SQL execution
///
/// Implementations (adapters) live in the infrastructure layer. Each call
/// scopes its connection to that one query and releases it on every path.
#[async_trait]
pub trait QueryExecutorPort: Send + Sync {
    /// Run `sql` and return every row it produces
    async fn run(&self, sql: &str) -> Result<ResultTable, QueryExecutionError>;
}

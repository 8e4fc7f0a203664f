//! Evaluate use case
//!
//! Scores the translator against a labeled gold set: for every case both the
//! gold SQL and the generated SQL are executed and their results compared
//! after normalization (column order, row order, numeric coercion).

use crate::ports::progress::{EvaluationProgress, NoProgress};
use crate::ports::query_executor::QueryExecutorPort;
use nl2sql_domain::{Clock, SystemClock, Translator, tables_equivalent};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// One labeled question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalCase {
    pub question: String,
    pub gold_sql: String,
}

impl EvalCase {
    pub fn new(question: impl Into<String>, gold_sql: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            gold_sql: gold_sql.into(),
        }
    }
}

/// Verdict for one case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum CaseOutcome {
    Match,
    Mismatch,
    /// The translator produced no SQL
    ParseFailure,
    /// Either the gold or the generated SQL failed to run
    ExecutionError(String),
}

impl CaseOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, CaseOutcome::Match)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseOutcome::Match => "match",
            CaseOutcome::Mismatch => "mismatch",
            CaseOutcome::ParseFailure => "parse failure",
            CaseOutcome::ExecutionError(_) => "execution error",
        }
    }
}

/// Per-case detail
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub question: String,
    pub outcome: CaseOutcome,
    pub system_sql: Option<String>,
    pub gold_sql: String,
}

/// Aggregate evaluation result
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    /// Percentage of matching cases, rounded to two decimals
    pub accuracy: f64,
    pub total: usize,
    pub correct: usize,
    pub details: Vec<CaseResult>,
}

impl EvaluationReport {
    pub fn from_details(details: Vec<CaseResult>) -> Self {
        let total = details.len();
        let correct = details.iter().filter(|d| d.outcome.is_match()).count();
        let accuracy = if total == 0 {
            0.0
        } else {
            (10_000.0 * correct as f64 / total as f64).round() / 100.0
        };
        Self {
            accuracy,
            total,
            correct,
            details,
        }
    }
}

/// Use case for running the evaluator
pub struct EvaluateUseCase<E: QueryExecutorPort + 'static, C: Clock = SystemClock> {
    executor: Arc<E>,
    translator: Translator<C>,
}

impl<E: QueryExecutorPort + 'static> EvaluateUseCase<E> {
    pub fn new(executor: Arc<E>) -> Self {
        Self::with_translator(executor, Translator::new())
    }
}

impl<E: QueryExecutorPort + 'static, C: Clock> EvaluateUseCase<E, C> {
    pub fn with_translator(executor: Arc<E>, translator: Translator<C>) -> Self {
        Self {
            executor,
            translator,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, cases: &[EvalCase]) -> EvaluationReport {
        self.execute_with_progress(cases, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        cases: &[EvalCase],
        progress: &dyn EvaluationProgress,
    ) -> EvaluationReport {
        info!("Evaluating {} cases", cases.len());
        progress.on_start(cases.len());

        let mut details = Vec::with_capacity(cases.len());
        for case in cases {
            let result = self.score(case).await;
            debug!("{:?} -> {}", case.question, result.outcome.label());
            progress.on_case_complete(&case.question, &result.outcome);
            details.push(result);
        }

        progress.on_finish();
        let report = EvaluationReport::from_details(details);
        info!(
            "Accuracy {}% ({}/{})",
            report.accuracy, report.correct, report.total
        );
        report
    }

    async fn score(&self, case: &EvalCase) -> CaseResult {
        let Some(system_sql) = self.translator.translate(&case.question) else {
            return CaseResult {
                question: case.question.clone(),
                outcome: CaseOutcome::ParseFailure,
                system_sql: None,
                gold_sql: case.gold_sql.trim().to_string(),
            };
        };

        let outcome = match self.executor.run(&case.gold_sql).await {
            Err(e) => CaseOutcome::ExecutionError(e.to_string()),
            Ok(gold) => match self.executor.run(&system_sql).await {
                Err(e) => CaseOutcome::ExecutionError(e.to_string()),
                Ok(system) if tables_equivalent(&gold, &system) => CaseOutcome::Match,
                Ok(_) => CaseOutcome::Mismatch,
            },
        };

        CaseResult {
            question: case.question.clone(),
            outcome,
            system_sql: Some(system_sql.trim().to_string()),
            gold_sql: case.gold_sql.trim().to_string(),
        }
    }
}

//! Answer Question use case
//!
//! Translates one question, runs the SQL, and reports the outcome without
//! ever propagating an error to the caller.

use crate::ports::query_executor::{QueryExecutionError, QueryExecutorPort};
use crate::ports::query_logger::{NoQueryLogger, QueryEvent, QueryLogger};
use nl2sql_domain::{Clock, Question, ResultTable, SystemClock, TranslationError, Translator};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Message shown to the user for every kind of failure.
pub const APOLOGY: &str = "Sorry, unable to answer at this point in time.";

/// Outcome of answering one question
#[derive(Debug, Clone)]
pub enum Answer {
    /// The query ran; `table` holds every row
    Rows { sql: String, table: ResultTable },
    /// SQL was generated but the executor rejected it
    Failed {
        sql: String,
        error: QueryExecutionError,
    },
    /// No SQL could be generated
    Unanswerable { reason: TranslationError },
}

impl Answer {
    /// The generated SQL, when there is any
    pub fn sql(&self) -> Option<&str> {
        match self {
            Answer::Rows { sql, .. } | Answer::Failed { sql, .. } => Some(sql),
            Answer::Unanswerable { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Answer::Rows { .. })
    }
}

/// Use case for answering a single question
pub struct AnswerQuestionUseCase<E: QueryExecutorPort + 'static, C: Clock = SystemClock> {
    executor: Arc<E>,
    translator: Translator<C>,
    logger: Arc<dyn QueryLogger>,
}

impl<E: QueryExecutorPort + 'static> AnswerQuestionUseCase<E> {
    pub fn new(executor: Arc<E>) -> Self {
        Self::with_translator(executor, Translator::new())
    }
}

impl<E: QueryExecutorPort + 'static, C: Clock> AnswerQuestionUseCase<E, C> {
    pub fn with_translator(executor: Arc<E>, translator: Translator<C>) -> Self {
        Self {
            executor,
            translator,
            logger: Arc::new(NoQueryLogger),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn QueryLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case
    pub async fn execute(&self, question: &str) -> Answer {
        let question = Question::new(question);
        let query = match self.translator.translate_question(&question) {
            Ok(query) => query,
            Err(reason) => {
                info!("Question not answerable: {}", reason);
                self.logger
                    .log(&QueryEvent::unanswerable(question.content(), &reason));
                return Answer::Unanswerable { reason };
            }
        };

        let intent = query.intent();
        info!("Matched intent {}", intent);
        debug!("Generated SQL:\n{}", query.sql());
        self.logger.log(&QueryEvent::Translated {
            question: question.content().to_string(),
            intent,
            sql: query.sql().to_string(),
        });

        let sql = query.into_sql();
        let started = Instant::now();
        let result = self.executor.run(&sql).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(table) => {
                info!("Query returned {} rows in {}ms", table.row_count(), elapsed_ms);
                self.logger.log(&QueryEvent::Executed {
                    intent,
                    rows: table.row_count(),
                    columns: table.columns().to_vec(),
                    elapsed_ms,
                });
                Answer::Rows { sql, table }
            }
            Err(error) => {
                warn!("Query execution failed: {}", error);
                self.logger.log(&QueryEvent::ExecutionFailed {
                    intent,
                    error: error.to_string(),
                    elapsed_ms,
                });
                Answer::Failed { sql, error }
            }
        }
    }
}

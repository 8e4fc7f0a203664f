//! Output formatter trait and result shaping shared by every format

use nl2sql_application::{Answer, DisplayParams, EvaluationReport};
use nl2sql_domain::{CellValue, ResultTable};

/// Renders answers and evaluation reports in one output format
pub trait OutputFormatter {
    /// Format the answer to `question`
    fn format_answer(&self, question: &str, answer: &Answer, params: &DisplayParams) -> String;

    /// Format an evaluation run
    fn format_report(&self, report: &EvaluationReport) -> String;
}

/// Shown in place of an empty result.
pub const NO_RESULTS: &str = "Sorry, no results found.";

/// Cell text of the row appended after a cut table.
pub const TRUNCATION_MARKER: &str = "…";

/// A query result reduced to what is worth showing
#[derive(Debug, Clone, PartialEq)]
pub enum FormattedResult {
    NoResults,
    /// A single row with a single column
    Scalar(CellValue),
    /// At most `max_rows` data rows, plus a marker row when cut
    Table { table: ResultTable, truncated: bool },
}

/// Shape `table` for display.
///
/// More than `max_rows` rows keeps the first `max_rows` and appends one row
/// whose every cell is [`TRUNCATION_MARKER`].
pub fn format_result(table: &ResultTable, max_rows: usize) -> FormattedResult {
    if table.is_empty() {
        return FormattedResult::NoResults;
    }
    if let Some(value) = table.scalar() {
        return FormattedResult::Scalar(value.clone());
    }
    if table.row_count() > max_rows {
        let mut head = table.head(max_rows);
        head.push_row(vec![CellValue::text(TRUNCATION_MARKER); table.column_count()]);
        return FormattedResult::Table {
            table: head,
            truncated: true,
        };
    }
    FormattedResult::Table {
        table: table.clone(),
        truncated: false,
    }
}

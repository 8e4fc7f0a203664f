//! Console output formatter for answers and evaluation reports

use crate::output::formatter::{FormattedResult, NO_RESULTS, OutputFormatter, format_result};
use colored::Colorize;
use nl2sql_application::{APOLOGY, Answer, CaseOutcome, DisplayParams, EvaluationReport};
use nl2sql_domain::{CellValue, ResultTable};

/// Formats answers as aligned text tables
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the answer to one question
    pub fn format_answer(answer: &Answer, params: &DisplayParams) -> String {
        let mut output = String::new();

        if params.show_sql
            && let Some(sql) = answer.sql()
        {
            output.push_str(&format!("{}\n{}\n\n", "SQL:".cyan().bold(), sql.dimmed()));
        }

        match answer {
            Answer::Rows { table, .. } => match format_result(table, params.max_rows) {
                FormattedResult::NoResults => output.push_str(NO_RESULTS),
                FormattedResult::Scalar(value) => output.push_str(&value.to_string()),
                FormattedResult::Table { table, .. } => output.push_str(&Self::format_table(&table)),
            },
            Answer::Failed { error, .. } => {
                output.push_str(&format!("{}\n{} {}", APOLOGY.red(), "Details:".bold(), error));
            }
            Answer::Unanswerable { .. } => output.push_str(&APOLOGY.red().to_string()),
        }

        output
    }

    /// Render a table with a bold header, numbers right-aligned
    pub fn format_table(table: &ResultTable) -> String {
        let cells: Vec<Vec<String>> = table
            .rows()
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let widths: Vec<usize> = table
            .columns()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                cells
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header = table
            .columns()
            .iter()
            .zip(&widths)
            .map(|(name, &width)| pad(name, width, false).bold().to_string())
            .collect::<Vec<_>>()
            .join("  ");
        let rule = widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("  ");

        let mut lines = vec![header.trim_end().to_string(), rule];
        for (row, raw) in cells.iter().zip(table.rows()) {
            let line = row
                .iter()
                .zip(raw)
                .zip(&widths)
                .map(|((text, value), &width)| pad(text, width, is_number(value)))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    /// Format an evaluation report with one line per case
    pub fn format_report(report: &EvaluationReport) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Evaluation Report"));
        output.push('\n');

        for detail in &report.details {
            let mark = match &detail.outcome {
                CaseOutcome::Match => "v".green(),
                CaseOutcome::Mismatch => "x".red(),
                CaseOutcome::ParseFailure => "?".yellow(),
                CaseOutcome::ExecutionError(_) => "!".red(),
            };
            output.push_str(&format!(
                "{} {:<15} {}\n",
                mark,
                detail.outcome.label(),
                detail.question
            ));
            if let CaseOutcome::ExecutionError(message) = &detail.outcome {
                output.push_str(&format!("  {}\n", message.dimmed()));
            }
        }

        output.push_str(&format!(
            "\n{} {:.2}% ({}/{})\n",
            "Accuracy:".cyan().bold(),
            report.accuracy,
            report.correct,
            report.total
        ));

        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_answer(&self, _question: &str, answer: &Answer, params: &DisplayParams) -> String {
        Self::format_answer(answer, params)
    }

    fn format_report(&self, report: &EvaluationReport) -> String {
        Self::format_report(report)
    }
}

fn is_number(value: &CellValue) -> bool {
    matches!(value, CellValue::Integer(_) | CellValue::Real(_))
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if right {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

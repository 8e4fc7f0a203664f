//! JSON output formatter

use crate::output::formatter::{FormattedResult, NO_RESULTS, OutputFormatter, format_result};
use nl2sql_application::{APOLOGY, Answer, DisplayParams, EvaluationReport};
use serde_json::{Map, Value, json};

/// Formats answers and reports as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn answer_value(question: &str, answer: &Answer, params: &DisplayParams) -> Value {
        let mut object = Map::new();
        object.insert("question".into(), json!(question));
        if params.show_sql {
            object.insert("sql".into(), json!(answer.sql()));
        }

        match answer {
            Answer::Rows { table, .. } => match format_result(table, params.max_rows) {
                FormattedResult::NoResults => {
                    object.insert("status".into(), json!("no_results"));
                    object.insert("message".into(), json!(NO_RESULTS));
                }
                FormattedResult::Scalar(value) => {
                    object.insert("status".into(), json!("ok"));
                    object.insert("value".into(), json!(value));
                }
                FormattedResult::Table { table, truncated } => {
                    object.insert("status".into(), json!("ok"));
                    object.insert("columns".into(), json!(table.columns()));
                    object.insert("rows".into(), json!(table.rows()));
                    object.insert("truncated".into(), json!(truncated));
                }
            },
            Answer::Failed { error, .. } => {
                object.insert("status".into(), json!("error"));
                object.insert("message".into(), json!(APOLOGY));
                object.insert("details".into(), json!(error.to_string()));
            }
            Answer::Unanswerable { .. } => {
                object.insert("status".into(), json!("unanswerable"));
                object.insert("message".into(), json!(APOLOGY));
            }
        }

        Value::Object(object)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_answer(&self, question: &str, answer: &Answer, params: &DisplayParams) -> String {
        serde_json::to_string_pretty(&Self::answer_value(question, answer, params))
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn format_report(&self, report: &EvaluationReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nl2sql_application::{CaseOutcome, CaseResult, QueryExecutionError};
    use nl2sql_domain::{CellValue, ResultTable, TranslationError};

    #[test]
    fn test_table_answer() {
        let answer = Answer::Rows {
            sql: "SELECT title, rent_price FROM properties".into(),
            table: ResultTable::new(
                vec!["title".into(), "rent_price".into()],
                vec![
                    vec![CellValue::text("Riverside Flat"), CellValue::Real(2200.0)],
                    vec![CellValue::text("Hackney House"), CellValue::Null],
                ],
            ),
        };
        let value = JsonFormatter::answer_value("q", &answer, &DisplayParams::default());
        assert_eq!(value["status"], "ok");
        assert_eq!(value["sql"], "SELECT title, rent_price FROM properties");
        assert_eq!(value["columns"], json!(["title", "rent_price"]));
        assert_eq!(value["rows"][0], json!(["Riverside Flat", 2200.0]));
        assert_eq!(value["rows"][1][1], Value::Null);
        assert_eq!(value["truncated"], false);
    }

    #[test]
    fn test_truncated_answer_and_hidden_sql() {
        let rows = (0..5).map(|i| vec![CellValue::Integer(i), CellValue::Integer(i)]).collect();
        let answer = Answer::Rows {
            sql: "SELECT".into(),
            table: ResultTable::new(vec!["a".into(), "b".into()], rows),
        };
        let params = DisplayParams::default().with_max_rows(2).with_show_sql(false);
        let value = JsonFormatter::answer_value("q", &answer, &params);
        assert!(value.get("sql").is_none());
        assert_eq!(value["truncated"], true);
        assert_eq!(value["rows"].as_array().unwrap().len(), 3);
        assert_eq!(value["rows"][2], json!(["…", "…"]));
    }

    #[test]
    fn test_failures() {
        let failed = Answer::Failed {
            sql: "SELECT * FROM nope".into(),
            error: QueryExecutionError::Prepare("no such table: nope".into()),
        };
        let value = JsonFormatter::answer_value("q", &failed, &DisplayParams::default());
        assert_eq!(value["status"], "error");
        assert_eq!(value["message"], APOLOGY);
        assert_eq!(value["details"], "Invalid SQL: no such table: nope");

        let unanswerable = Answer::Unanswerable {
            reason: TranslationError::UnparseableQuestion,
        };
        let value = JsonFormatter::answer_value("weather?", &unanswerable, &DisplayParams::default());
        assert_eq!(value["status"], "unanswerable");
        assert_eq!(value["sql"], Value::Null);
    }

    #[test]
    fn test_report_json() {
        let report = EvaluationReport::from_details(vec![CaseResult {
            question: "weather".into(),
            outcome: CaseOutcome::ParseFailure,
            system_sql: None,
            gold_sql: "SELECT 1".into(),
        }]);
        let text = JsonFormatter.format_report(&report);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["accuracy"], 0.0);
        assert_eq!(value["details"][0]["outcome"]["status"], "parse_failure");
    }
}

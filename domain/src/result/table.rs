//! Tabular query result

use serde::Serialize;
use std::fmt;

/// One cell of a result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Numeric view of the cell, parsing text when it holds a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Integer(i) => Some(*i as f64),
            CellValue::Real(r) => Some(*r),
            CellValue::Text(s) => s.trim().parse().ok(),
            CellValue::Null => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => f.write_str("NULL"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Real(r) => write!(f, "{r}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Column names plus rows, as returned by the query executor.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The single value of a one-row, one-column table
    pub fn scalar(&self) -> Option<&CellValue> {
        match (self.columns.len(), self.rows.as_slice()) {
            (1, [row]) => row.first(),
            _ => None,
        }
    }

    /// Keep the first `n` rows
    pub fn head(&self, n: usize) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().take(n).cloned().collect(),
        }
    }

    /// Append a row; it is expected to have one cell per column
    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: Vec<Vec<CellValue>>) -> ResultTable {
        ResultTable::new(vec!["a".into(), "b".into()], rows)
    }

    #[test]
    fn test_scalar() {
        let t = ResultTable::new(vec!["n".into()], vec![vec![CellValue::Integer(42)]]);
        assert_eq!(t.scalar(), Some(&CellValue::Integer(42)));

        let t = table(vec![vec![CellValue::Integer(1), CellValue::Integer(2)]]);
        assert_eq!(t.scalar(), None);

        let t = ResultTable::new(vec!["n".into()], vec![]);
        assert_eq!(t.scalar(), None);
    }

    #[test]
    fn test_head() {
        let t = table(vec![
            vec![CellValue::Integer(1), CellValue::Integer(2)],
            vec![CellValue::Integer(3), CellValue::Integer(4)],
            vec![CellValue::Integer(5), CellValue::Integer(6)],
        ]);
        let h = t.head(2);
        assert_eq!(h.row_count(), 2);
        assert_eq!(h.columns(), t.columns());
        assert_eq!(t.head(10).row_count(), 3);
    }

    #[test]
    fn test_cell_display_and_numeric_view() {
        assert_eq!(CellValue::Real(12.5).to_string(), "12.5");
        assert_eq!(CellValue::Null.to_string(), "NULL");
        assert_eq!(CellValue::text(" 7 ").as_f64(), Some(7.0));
        assert_eq!(CellValue::text("seven").as_f64(), None);
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_string(&vec![
            CellValue::Null,
            CellValue::Integer(3),
            CellValue::text("x"),
        ])
        .unwrap();
        assert_eq!(json, "[null,3,\"x\"]");
    }
}

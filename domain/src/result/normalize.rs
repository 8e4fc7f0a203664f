//! Order-insensitive comparison of result tables.
//!
//! Two queries answer the same question when their results agree after:
//! numeric coercion of every column whose non-null cells are all numbers (or
//! numeric text), sorting columns by name, and sorting rows.

use std::cmp::Ordering;

use super::table::{CellValue, ResultTable};

/// Canonical form of `table` for comparison.
pub fn normalize_table(table: &ResultTable) -> ResultTable {
    let numeric: Vec<bool> = (0..table.column_count())
        .map(|col| is_numeric_column(table, col))
        .collect();

    let mut order: Vec<usize> = (0..table.column_count()).collect();
    order.sort_by(|a, b| table.columns()[*a].cmp(&table.columns()[*b]));

    let columns = order.iter().map(|i| table.columns()[*i].clone()).collect();
    let mut rows: Vec<Vec<CellValue>> = table
        .rows()
        .iter()
        .map(|row| {
            order
                .iter()
                .map(|i| {
                    let cell = row.get(*i).cloned().unwrap_or(CellValue::Null);
                    if numeric[*i] { coerce_numeric(cell) } else { cell }
                })
                .collect()
        })
        .collect();
    rows.sort_by(|a, b| compare_rows(a, b));

    ResultTable::new(columns, rows)
}

/// True when both tables hold the same data regardless of column and row order.
pub fn tables_equivalent(left: &ResultTable, right: &ResultTable) -> bool {
    normalize_table(left) == normalize_table(right)
}

fn is_numeric_column(table: &ResultTable, col: usize) -> bool {
    table
        .rows()
        .iter()
        .filter_map(|row| row.get(col))
        .all(|cell| cell.is_null() || cell.as_f64().is_some())
}

fn coerce_numeric(cell: CellValue) -> CellValue {
    match cell.as_f64() {
        Some(value) => CellValue::Real(value),
        None => cell,
    }
}

fn compare_rows(a: &[CellValue], b: &[CellValue]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| compare_cells(x, y))
        .find(|o| o.is_ne())
        .unwrap_or_else(|| a.len().cmp(&b.len()))
}

/// Numbers before text, nulls last.
fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a, b) {
        (CellValue::Null, CellValue::Null) => Ordering::Equal,
        (CellValue::Null, _) => Ordering::Greater,
        (_, CellValue::Null) => Ordering::Less,
        (CellValue::Text(x), CellValue::Text(y)) => x.cmp(y),
        (CellValue::Text(_), _) => Ordering::Greater,
        (_, CellValue::Text(_)) => Ordering::Less,
        _ => {
            let x = a.as_f64().unwrap_or(f64::NAN);
            let y = b.as_f64().unwrap_or(f64::NAN);
            x.total_cmp(&y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_column_and_row_order_ignored() {
        let left = ResultTable::new(
            cols(&["tenant_id", "total_rent"]),
            vec![
                vec![CellValue::Integer(1), CellValue::Real(900.0)],
                vec![CellValue::Integer(2), CellValue::Real(1200.0)],
            ],
        );
        let right = ResultTable::new(
            cols(&["total_rent", "tenant_id"]),
            vec![
                vec![CellValue::Real(1200.0), CellValue::Integer(2)],
                vec![CellValue::Real(900.0), CellValue::Integer(1)],
            ],
        );
        assert!(tables_equivalent(&left, &right));
    }

    #[test]
    fn test_numeric_coercion() {
        let left = ResultTable::new(
            cols(&["n"]),
            vec![vec![CellValue::Integer(5)], vec![CellValue::text("7")]],
        );
        let right = ResultTable::new(
            cols(&["n"]),
            vec![vec![CellValue::Real(7.0)], vec![CellValue::Real(5.0)]],
        );
        assert!(tables_equivalent(&left, &right));
    }

    #[test]
    fn test_mixed_text_column_not_coerced() {
        let table = ResultTable::new(
            cols(&["v"]),
            vec![vec![CellValue::text("10")], vec![CellValue::text("ten")]],
        );
        let normalized = normalize_table(&table);
        assert_eq!(
            normalized.rows(),
            &[vec![CellValue::text("10")], vec![CellValue::text("ten")]]
        );
    }

    #[test]
    fn test_nulls_sort_last() {
        let table = ResultTable::new(
            cols(&["v"]),
            vec![
                vec![CellValue::Null],
                vec![CellValue::Integer(3)],
                vec![CellValue::Integer(1)],
            ],
        );
        let normalized = normalize_table(&table);
        assert_eq!(
            normalized.rows(),
            &[
                vec![CellValue::Real(1.0)],
                vec![CellValue::Real(3.0)],
                vec![CellValue::Null],
            ]
        );
    }

    #[test]
    fn test_different_values_differ() {
        let left = ResultTable::new(cols(&["n"]), vec![vec![CellValue::Integer(1)]]);
        let right = ResultTable::new(cols(&["n"]), vec![vec![CellValue::Integer(2)]]);
        assert!(!tables_equivalent(&left, &right));
    }

    #[test]
    fn test_different_column_names_differ() {
        let left = ResultTable::new(cols(&["a"]), vec![vec![CellValue::Integer(1)]]);
        let right = ResultTable::new(cols(&["b"]), vec![vec![CellValue::Integer(1)]]);
        assert!(!tables_equivalent(&left, &right));
    }

    #[test]
    fn test_empty_tables_equal() {
        assert!(tables_equivalent(
            &ResultTable::default(),
            &ResultTable::default()
        ));
    }
}

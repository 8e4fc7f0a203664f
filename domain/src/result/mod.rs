//! Query results: the table the executor hands back and its canonical form.

pub mod normalize;
pub mod table;

pub use normalize::{normalize_table, tables_equivalent};
pub use table::{CellValue, ResultTable};

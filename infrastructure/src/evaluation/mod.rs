//! Evaluation inputs.

mod gold_set;

pub use gold_set::{GoldSetError, load_gold_set};

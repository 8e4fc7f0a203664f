//! Domain layer for rental-nl2sql
//!
//! This crate turns an English question about the rental dataset into SQL.
//! It performs no I/O and holds no state beyond an injected clock.
//!
//! # Pipeline
//!
//! 1. **Normalize**: lowercase, collapse whitespace ([`NormalizedQuestion`])
//! 2. **Match**: the first of five ordered rules selects an [`Intent`]
//! 3. **Extract**: independent pattern extractors fill a [`SlotSet`]
//! 4. **Render**: the intent's fixed template is filled from the slots
//!
//! Any failure (no rule matched, mandatory slot missing) is a
//! [`TranslationError`] internally and `None` from [`translate`].

pub mod config;
pub mod core;
pub mod intent;
pub mod result;
pub mod slot;
pub mod sql;
pub mod translate;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    clock::{Clock, FixedClock, SystemClock},
    error::TranslationError,
    question::{NormalizedQuestion, Question, normalize},
};
pub use intent::{Intent, IntentRule, RULES, match_intent};
pub use result::{CellValue, ResultTable, normalize_table, tables_equivalent};
pub use slot::{DEFAULT_LIMIT, Quarter, SlotKind, SlotSet};
pub use sql::{RenderedQuery, render};
pub use translate::{Translator, translate};

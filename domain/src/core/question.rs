//! Question value objects

use serde::{Deserialize, Serialize};

/// A business question as typed by the user (Value Object)
///
/// The raw text is kept untouched; every pattern rule works on the
/// [`NormalizedQuestion`] derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question from any text, empty included
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Derive the canonical form used for matching
    pub fn normalize(&self) -> NormalizedQuestion {
        NormalizedQuestion::new(&self.content)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

impl From<String> for Question {
    fn from(s: String) -> Self {
        Question::new(s)
    }
}

/// Lower-cased question text with whitespace runs collapsed and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedQuestion(String);

impl NormalizedQuestion {
    pub fn new(raw: &str) -> Self {
        Self(normalize(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring test against the normalized text
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// True when any of the needles occurs in the text
    pub fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.0.contains(n))
    }
}

impl std::fmt::Display for NormalizedQuestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonicalize question text: lowercase, single spaces, no outer whitespace.
///
/// Total and idempotent.
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

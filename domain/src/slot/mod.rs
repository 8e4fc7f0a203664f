//! Slots: typed values pulled out of the question text.
//!
//! - [`extractors`]: one pure function per slot
//! - [`quarter::Quarter`]: quarter number plus year
//! - [`SlotSet`]: every slot extracted from one question

pub mod extractors;
pub mod quarter;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::question::NormalizedQuestion;
pub use quarter::Quarter;

/// Limit applied when an intent needs one and the question names none.
pub const DEFAULT_LIMIT: u64 = 10;

/// Names of the slots, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    City,
    Year,
    Quarter,
    PriceCeiling,
    Bedrooms,
    Limit,
}

impl SlotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotKind::City => "city",
            SlotKind::Year => "year",
            SlotKind::Quarter => "quarter",
            SlotKind::PriceCeiling => "price ceiling",
            SlotKind::Bedrooms => "bedroom count",
            SlotKind::Limit => "limit",
        }
    }
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All slots of a single question.
///
/// Every field is filled by its own extractor; none reads another's result.
/// `year` and the year inside `quarter` fall back to the supplied current year.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SlotSet {
    pub city: Option<String>,
    pub year: Option<i32>,
    pub quarter: Option<Quarter>,
    pub price_ceiling: Option<f64>,
    pub is_two_bedroom: bool,
    pub limit: Option<u64>,
}

impl SlotSet {
    /// Run every extractor over the question.
    pub fn extract(question: &NormalizedQuestion, current_year: i32) -> Self {
        Self {
            city: extractors::extract_city(question),
            year: extractors::extract_year(question, Some(current_year)),
            quarter: extractors::extract_quarter(question, current_year),
            price_ceiling: extractors::extract_price_ceiling(question),
            is_two_bedroom: extractors::is_two_bedroom(question),
            limit: extractors::extract_limit(question),
        }
    }

    /// The parsed limit, or [`DEFAULT_LIMIT`].
    pub fn limit_or_default(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_availability_question() {
        let q = NormalizedQuestion::new("List all currently available 2BHKs under $2500 in London.");
        let slots = SlotSet::extract(&q, 2026);
        assert_eq!(slots.city.as_deref(), Some("London"));
        assert_eq!(slots.price_ceiling, Some(2500.0));
        assert!(slots.is_two_bedroom);
        assert_eq!(slots.year, Some(2026));
        assert_eq!(slots.quarter, None);
        assert_eq!(slots.limit, None);
        assert_eq!(slots.limit_or_default(), DEFAULT_LIMIT);
    }

    #[test]
    fn test_extract_occupancy_question() {
        let q = NormalizedQuestion::new("What's the occupancy rate of properties in Bradford in Q2 2024?");
        let slots = SlotSet::extract(&q, 2026);
        assert_eq!(slots.city.as_deref(), Some("Bradford"));
        assert_eq!(slots.quarter, Quarter::new(2, 2024));
        assert_eq!(slots.year, Some(2024));
    }

    #[test]
    fn test_slot_kind_display() {
        assert_eq!(SlotKind::PriceCeiling.to_string(), "price ceiling");
        assert_eq!(SlotKind::Quarter.to_string(), "quarter");
    }
}

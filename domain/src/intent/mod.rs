//! Intents: the closed set of question categories the system can answer.

pub mod matcher;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use matcher::{IntentRule, RULES, match_intent};

/// Question category (Value Object)
///
/// Exactly one intent is selected per question; `Unknown` is the catch-all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    TopTenantsByRent,
    AverageRatingByPropertyType,
    LandlordRevenueByYear,
    AvailabilityFilter,
    OccupancyRateByQuarter,
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::TopTenantsByRent => "top_tenants_by_rent",
            Intent::AverageRatingByPropertyType => "average_rating_by_property_type",
            Intent::LandlordRevenueByYear => "landlord_revenue_by_year",
            Intent::AvailabilityFilter => "availability_filter",
            Intent::OccupancyRateByQuarter => "occupancy_rate_by_quarter",
            Intent::Unknown => "unknown",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Intent::Unknown)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_snake_case() {
        let json = serde_json::to_string(&Intent::LandlordRevenueByYear).unwrap();
        assert_eq!(json, "\"landlord_revenue_by_year\"");
    }

    #[test]
    fn test_display_matches_serde() {
        for intent in [
            Intent::TopTenantsByRent,
            Intent::AverageRatingByPropertyType,
            Intent::LandlordRevenueByYear,
            Intent::AvailabilityFilter,
            Intent::OccupancyRateByQuarter,
            Intent::Unknown,
        ] {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{intent}\""));
        }
    }

    #[test]
    fn test_is_known() {
        assert!(Intent::AvailabilityFilter.is_known());
        assert!(!Intent::Unknown.is_known());
    }
}

//! Intent matcher.
//!
//! [`RULES`] is evaluated top to bottom and the first predicate that holds
//! selects the intent. Predicates overlap on purpose; the position in the list
//! is the tie-break, so reordering rules changes behavior.

use super::Intent;
use crate::core::question::NormalizedQuestion;
use crate::slot::extractors;

/// A predicate over the normalized question paired with the intent it selects.
#[derive(Clone, Copy)]
pub struct IntentRule {
    pub intent: Intent,
    pub predicate: fn(&NormalizedQuestion) -> bool,
}

impl std::fmt::Debug for IntentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentRule")
            .field("intent", &self.intent)
            .finish_non_exhaustive()
    }
}

/// Rules in priority order.
pub const RULES: [IntentRule; 5] = [
    IntentRule {
        intent: Intent::TopTenantsByRent,
        predicate: asks_top_tenants,
    },
    IntentRule {
        intent: Intent::AverageRatingByPropertyType,
        predicate: asks_average_rating,
    },
    IntentRule {
        intent: Intent::LandlordRevenueByYear,
        predicate: asks_landlord_revenue,
    },
    IntentRule {
        intent: Intent::AvailabilityFilter,
        predicate: asks_availability,
    },
    IntentRule {
        intent: Intent::OccupancyRateByQuarter,
        predicate: asks_occupancy,
    },
];

/// Select the intent of the first matching rule, or `Unknown`.
pub fn match_intent(question: &NormalizedQuestion) -> Intent {
    RULES
        .iter()
        .find(|rule| (rule.predicate)(question))
        .map_or(Intent::Unknown, |rule| rule.intent)
}

fn asks_top_tenants(q: &NormalizedQuestion) -> bool {
    (q.contains("top") && q.contains("tenant") && q.contains_any(&["rent", "amount"]))
        || (q.contains("tenants") && q.contains("total rent"))
}

fn asks_average_rating(q: &NormalizedQuestion) -> bool {
    q.contains("average rating") && q.contains_any(&["apartment", "house", "vs"])
}

fn asks_landlord_revenue(q: &NormalizedQuestion) -> bool {
    (q.contains("landlord") && q.contains_any(&["revenue", "earnings"]))
        || (q.contains("most revenue") && q.contains("landlord"))
}

fn asks_availability(q: &NormalizedQuestion) -> bool {
    q.contains_any(&["available", "currently available"]) && extractors::is_two_bedroom(q)
}

// The quarter itself is a mandatory slot checked at render time.
fn asks_occupancy(q: &NormalizedQuestion) -> bool {
    q.contains_any(&["occupancy rate", "occupancy"]) && q.contains_any(&["quarter", "q"])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(s: &str) -> Intent {
        match_intent(&NormalizedQuestion::new(s))
    }

    #[test]
    fn test_top_tenants() {
        assert_eq!(
            classify("Who are the top 10 tenants by total rent paid?"),
            Intent::TopTenantsByRent
        );
        assert_eq!(
            classify("Top tenants by amount paid"),
            Intent::TopTenantsByRent
        );
        assert_eq!(
            classify("Which tenants paid the most total rent?"),
            Intent::TopTenantsByRent
        );
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(
            classify("What's the average rating of apartments vs houses?"),
            Intent::AverageRatingByPropertyType
        );
        assert_eq!(
            classify("average rating: studio vs villa"),
            Intent::AverageRatingByPropertyType
        );
    }

    #[test]
    fn test_landlord_revenue() {
        assert_eq!(
            classify("Which landlords generated the most revenue in 2024?"),
            Intent::LandlordRevenueByYear
        );
        assert_eq!(
            classify("Landlord earnings for 2023"),
            Intent::LandlordRevenueByYear
        );
    }

    #[test]
    fn test_availability() {
        assert_eq!(
            classify("List all currently available 2BHKs under $2500 in London."),
            Intent::AvailabilityFilter
        );
        assert_eq!(
            classify("Show available 2 bedroom flats in Bradford"),
            Intent::AvailabilityFilter
        );
    }

    #[test]
    fn test_availability_needs_two_bedrooms() {
        assert_eq!(
            classify("List all available 3 bedroom houses"),
            Intent::Unknown
        );
    }

    #[test]
    fn test_occupancy() {
        assert_eq!(
            classify("What's the occupancy rate of properties in Bradford in Q2 2024?"),
            Intent::OccupancyRateByQuarter
        );
        assert_eq!(
            classify("occupancy last quarter"),
            Intent::OccupancyRateByQuarter
        );
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify("What is the weather today?"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
    }

    #[test]
    fn test_tenant_rule_precedes_landlord_rule() {
        assert_eq!(
            classify("Top tenants by rent and landlords by revenue in 2024"),
            Intent::TopTenantsByRent
        );
    }

    #[test]
    fn test_rating_rule_precedes_availability_rule() {
        assert_eq!(
            classify("average rating of available 2bhk apartments"),
            Intent::AverageRatingByPropertyType
        );
    }

    #[test]
    fn test_rules_are_in_priority_order() {
        let order: Vec<Intent> = RULES.iter().map(|r| r.intent).collect();
        assert_eq!(
            order,
            vec![
                Intent::TopTenantsByRent,
                Intent::AverageRatingByPropertyType,
                Intent::LandlordRevenueByYear,
                Intent::AvailabilityFilter,
                Intent::OccupancyRateByQuarter,
            ]
        );
    }
}

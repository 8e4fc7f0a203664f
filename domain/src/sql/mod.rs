//! Template renderer: intent + slots → SQL.

pub mod templates;

use serde::Serialize;
use std::fmt;

use crate::core::error::TranslationError;
use crate::intent::Intent;
use crate::slot::{SlotKind, SlotSet};

/// City used by the availability filter when none is named.
pub const DEFAULT_AVAILABILITY_CITY: &str = "London";
/// City used by the occupancy rate when none is named.
pub const DEFAULT_OCCUPANCY_CITY: &str = "Bradford";
/// Price ceiling used by the availability filter when none is named (or it is zero).
pub const DEFAULT_PRICE_CEILING: f64 = 2500.0;

/// SQL produced for one question, tagged with the intent that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedQuery {
    intent: Intent,
    sql: String,
}

impl RenderedQuery {
    pub fn new(intent: Intent, sql: impl Into<String>) -> Self {
        Self {
            intent,
            sql: sql.into(),
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn into_sql(self) -> String {
        self.sql
    }
}

impl fmt::Display for RenderedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

/// Fill the template of `intent` from `slots`.
///
/// Fails for `Unknown` and when the occupancy intent has no quarter.
pub fn render(intent: Intent, slots: &SlotSet) -> Result<RenderedQuery, TranslationError> {
    let sql = match intent {
        Intent::TopTenantsByRent => templates::top_tenants_by_rent(slots.limit_or_default()),
        Intent::AverageRatingByPropertyType => templates::average_rating_by_property_type(),
        Intent::LandlordRevenueByYear => {
            let year = slots.year.ok_or(TranslationError::IncompleteSlots {
                intent,
                slot: SlotKind::Year,
            })?;
            templates::landlord_revenue_by_year(year)
        }
        Intent::AvailabilityFilter => {
            let city = slots.city.as_deref().unwrap_or(DEFAULT_AVAILABILITY_CITY);
            let price = slots
                .price_ceiling
                .filter(|p| *p != 0.0)
                .unwrap_or(DEFAULT_PRICE_CEILING);
            templates::availability_filter(city, price)
        }
        Intent::OccupancyRateByQuarter => {
            let quarter = slots.quarter.ok_or(TranslationError::IncompleteSlots {
                intent,
                slot: SlotKind::Quarter,
            })?;
            let city = slots.city.as_deref().unwrap_or(DEFAULT_OCCUPANCY_CITY);
            templates::occupancy_rate_by_quarter(city, quarter)
        }
        Intent::Unknown => return Err(TranslationError::UnparseableQuestion),
    };
    Ok(RenderedQuery::new(intent, sql))
}

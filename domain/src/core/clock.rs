//! Clock abstraction for time-dependent slot defaults.
//!
//! The landlord-revenue year and an omitted quarter year both default to the
//! current calendar year. Reading it through [`Clock`] keeps the translator
//! deterministic under test.

use chrono::Datelike;

/// Source of the current calendar year.
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Wall clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Clock pinned to one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

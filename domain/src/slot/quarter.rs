//! Calendar quarter value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// First and last day (`MM-DD`) of each quarter.
const QUARTER_BOUNDS: [(&str, &str); 4] = [
    ("01-01", "03-31"),
    ("04-01", "06-30"),
    ("07-01", "09-30"),
    ("10-01", "12-31"),
];

/// A calendar quarter of a given year (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quarter {
    number: u8,
    year: i32,
}

impl Quarter {
    /// Create a quarter, returning None unless `number` is in 1..=4
    pub fn new(number: u8, year: i32) -> Option<Self> {
        (1..=4).contains(&number).then_some(Self { number, year })
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// First day of the quarter as `YYYY-MM-DD`
    pub fn start_date(&self) -> String {
        format!("{}-{}", self.year, self.bounds().0)
    }

    /// Last day of the quarter as `YYYY-MM-DD`
    pub fn end_date(&self) -> String {
        format!("{}-{}", self.year, self.bounds().1)
    }

    fn bounds(&self) -> (&'static str, &'static str) {
        QUARTER_BOUNDS[usize::from(self.number - 1)]
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.number, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_range() {
        assert!(Quarter::new(0, 2024).is_none());
        assert!(Quarter::new(5, 2024).is_none());
        assert!(Quarter::new(1, 2024).is_some());
        assert!(Quarter::new(4, 2024).is_some());
    }

    #[test]
    fn test_quarter_window() {
        let q2 = Quarter::new(2, 2024).unwrap();
        assert_eq!(q2.start_date(), "2024-04-01");
        assert_eq!(q2.end_date(), "2024-06-30");

        let q4 = Quarter::new(4, 2023).unwrap();
        assert_eq!(q4.start_date(), "2023-10-01");
        assert_eq!(q4.end_date(), "2023-12-31");
    }

    #[test]
    fn test_quarter_display() {
        assert_eq!(Quarter::new(3, 2025).unwrap().to_string(), "Q3 2025");
    }
}

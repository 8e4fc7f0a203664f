//! Command-line interface definitions

pub mod commands;

/// Questions covering every recognized intent.
pub const SAMPLE_QUESTIONS: [&str; 5] = [
    "What’s the occupancy rate of properties in Bradford in Q2 2024?",
    "Who are the top 10 tenants by total rent paid?",
    "What’s the average rating of apartments vs houses?",
    "Which landlords generated the most revenue in 2024?",
    "List all currently available 2BHKs under $2500 in London.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use nl2sql_domain::{FixedClock, Translator};

    #[test]
    fn test_every_sample_translates() {
        let translator = Translator::with_clock(FixedClock(2024));
        for question in SAMPLE_QUESTIONS {
            assert!(translator.translate(question).is_some(), "{question}");
        }
    }
}

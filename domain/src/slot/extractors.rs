//! Slot extractors.
//!
//! Each extractor is a pure function over a [`NormalizedQuestion`] and does
//! not look at any other extractor's output. Defaults that are not plain
//! constants (the current year) are passed in by the caller.

use std::sync::LazyLock;

use regex::Regex;

use super::quarter::Quarter;
use crate::core::question::NormalizedQuestion;

/// Cities recognized by substring before the `in <place>` fallback.
pub const KNOWN_CITIES: &[&str] = &["london", "bradford"];

/// City extraction: known cities first, then the words after `in `.
pub fn extract_city(question: &NormalizedQuestion) -> Option<String> {
    let text = question.as_str();

    if let Some(city) = KNOWN_CITIES.iter().find(|c| text.contains(*c)) {
        return Some(capitalize(city));
    }

    CITY_AFTER_IN_PATTERN
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|place| !place.is_empty())
        .map(|place| title_case(&place))
}

/// First `20xx` in the text, else `default`.
pub fn extract_year(question: &NormalizedQuestion, default: Option<i32>) -> Option<i32> {
    YEAR_PATTERN
        .find(question.as_str())
        .and_then(|m| m.as_str().parse().ok())
        .or(default)
}

/// `q1`..`q4` with an optional trailing year; the year falls back to `current_year`.
pub fn extract_quarter(question: &NormalizedQuestion, current_year: i32) -> Option<Quarter> {
    let caps = QUARTER_PATTERN.captures(question.as_str())?;
    let number: u8 = caps[1].parse().ok()?;
    let year = caps
        .get(2)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(current_year);
    Quarter::new(number, year)
}

/// Price ceiling: a comparison-qualified amount, else any number in the text.
///
/// The bare-number fallback also fires on unrelated numbers ("2bhk" yields 2).
pub fn extract_price_ceiling(question: &NormalizedQuestion) -> Option<f64> {
    let text = question.as_str();
    QUALIFIED_PRICE_PATTERN
        .captures(text)
        .or_else(|| ANY_NUMBER_PATTERN.captures(text))
        .and_then(|caps| parse_amount(&caps[1]))
}

/// `2bhk`, `2 bed`, `2 bedroom`, `2 bedrooms`, `2beds`...
pub fn is_two_bedroom(question: &NormalizedQuestion) -> bool {
    question.contains("2bhk") || TWO_BEDROOM_PATTERN.is_match(question.as_str())
}

/// `top N`
///
/// A digit run too long for `u64` saturates at `u64::MAX`.
pub fn extract_limit(question: &NormalizedQuestion) -> Option<u64> {
    let caps = LIMIT_PATTERN.captures(question.as_str())?;
    Some(caps[1].parse().unwrap_or(u64::MAX))
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

// ============================================================================
// Regex Patterns
// ============================================================================

static CITY_AFTER_IN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"in ([a-z\s]+)").expect("Invalid regex"));
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"20[0-9]{2}").expect("Invalid regex"));
static QUARTER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"q([1-4])\s*(20[0-9]{2})?").expect("Invalid regex"));
static QUALIFIED_PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:under|below|<=|less than)\s*[$£€]?\s*([0-9][0-9,]*)").expect("Invalid regex")
});
static ANY_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[$£€]?\s*([0-9][0-9,]*)").expect("Invalid regex"));
static TWO_BEDROOM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b2\s*bed(?:room)?s?\b").expect("Invalid regex"));
static LIMIT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"top\s+([0-9]+)").expect("Invalid regex"));

// ============================================================================
// Tests
// ============================================================================

//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`] / [`question::NormalizedQuestion`]: raw and canonical question text
//! - [`clock::Clock`]: source of the current year for time-dependent defaults
//! - [`error::TranslationError`]: why a question could not be translated

pub mod clock;
pub mod error;
pub mod question;

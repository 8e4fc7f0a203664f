//! Application-level configuration.
//!
//! - [`DisplayParams`]: row cap and SQL echo for rendered answers

pub mod display_params;

pub use display_params::DisplayParams;

//! Terminal output formatting
//!
//! Display utilities shared by the plain CLI play mode.

pub mod formatters;

pub use formatters::{colorize_row, evaluation_to_emoji};

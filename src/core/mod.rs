//! Core domain types for the Wordle game
//!
//! This module contains the fundamental domain types with zero external I/O.
//! All types here are pure, testable, and have clear invariants.

mod evaluation;
mod word;

pub use evaluation::{CellState, Evaluation};
pub use word::{Word, WordError};

/// Number of letters in every target and guess
pub const WORD_LENGTH: usize = 5;

/// Number of guess rows on the board
pub const MAX_GUESSES: usize = 6;

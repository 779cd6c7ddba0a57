//! Wordle Game
//!
//! A terminal Wordle: guess the hidden 5-letter word in 6 tries, with
//! duplicate-letter-correct feedback and a data-driven reveal animation.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::engine::{GameEngine, GameStatus, SubmitOutcome};
//! use wordle_game::wordlists::WordList;
//! use wordle_game::wordlists::loader::words_from_slice;
//!
//! let words = WordList::new(words_from_slice(&["crane", "slate"])).unwrap();
//! let mut engine = GameEngine::with_target(&words, Word::new("crane").unwrap());
//!
//! for ch in "crane".chars() {
//!     engine.type_letter(ch);
//! }
//! let outcome = engine.submit_guess();
//! assert!(matches!(outcome, SubmitOutcome::Accepted { status: GameStatus::Won, .. }));
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

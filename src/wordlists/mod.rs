//! Word list service
//!
//! Holds the authoritative set of guessable words and supplies membership
//! testing and random target selection. The same list backs both guesses
//! and targets.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for word list construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    /// The dictionary has zero entries; fatal at startup
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list is empty"),
        }
    }
}

impl std::error::Error for WordListError {}

/// Immutable dictionary of valid guesses and target candidates
///
/// Construction rejects an empty list, so every constructed `WordList` can
/// always produce a target.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Create a word list from pre-validated words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if `words` has no entries.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::wordlists::WordList;
    ///
    /// let words = vec![Word::new("crane").unwrap(), Word::new("slate").unwrap()];
    /// let list = WordList::new(words).unwrap();
    /// assert!(list.contains("CRANE"));
    /// ```
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        let index = words.iter().map(|w| w.text().to_string()).collect();
        Ok(Self { words, index })
    }

    /// Build the default list from the embedded words
    ///
    /// # Panics
    /// Will not panic - the embedded list is generated non-empty at build time.
    #[must_use]
    pub fn embedded() -> Self {
        let words = loader::words_from_slice(WORDS);
        Self::new(words).expect("embedded word list is non-empty")
    }

    /// Case-insensitive membership test
    ///
    /// Accepts any casing; invalid strings are simply not members.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// Draw a uniformly random target word
    ///
    /// # Panics
    /// Will not panic - the list is non-empty by construction.
    #[must_use]
    pub fn pick_random(&self) -> &Word {
        self.words
            .choose(&mut rand::rng())
            .expect("word list is non-empty by construction")
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check whether the list is empty (always false post-construction)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_list() -> WordList {
        let words = ["crane", "slate", "erase", "speed"]
            .iter()
            .map(|s| Word::new(*s).unwrap())
            .collect();
        WordList::new(words).unwrap()
    }

    #[test]
    fn empty_list_rejected() {
        assert!(matches!(WordList::new(Vec::new()), Err(WordListError::Empty)));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let list = small_list();
        assert!(list.contains("crane"));
        assert!(list.contains("CRANE"));
        assert!(list.contains("CrAnE"));
        assert!(!list.contains("zzzzz"));
    }

    #[test]
    fn contains_rejects_malformed_input() {
        let list = small_list();
        assert!(!list.contains(""));
        assert!(!list.contains("cran"));
        assert!(!list.contains("cranes"));
    }

    #[test]
    fn pick_random_returns_member() {
        let list = small_list();
        for _ in 0..20 {
            let target = list.pick_random();
            assert!(list.contains(target.text()));
        }
    }

    #[test]
    fn embedded_list_is_usable() {
        let list = WordList::embedded();
        assert_eq!(list.len(), WORDS_COUNT);
        assert!(list.contains("crane"));
        assert!(list.contains("erase"));
        assert!(list.contains("speed"));
    }

    #[test]
    fn embedded_words_are_valid() {
        // All embedded words should be 5 letters, lowercase
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }
}

//! Guess evaluation
//!
//! Scoring a guess against the target produces one cell state per position:
//! - `Correct` (letter in the right position)
//! - `Present` (letter in the word, wrong position)
//! - `Absent` (letter not in the word, or all occurrences already credited)
//!
//! Duplicate letters are handled with frequency accounting: exact matches
//! consume a letter's budget first, then misplaced matches consume what
//! remains, left to right.

use super::{WORD_LENGTH, Word};
use std::fmt;

/// State of a single board cell
///
/// `Correct`/`Present`/`Absent` are terminal once a row is submitted.
/// `Typing` marks a just-entered letter; `Flip` exists only inside a reveal
/// timeline while a cell is mid-animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// No letter submitted for this cell yet
    #[default]
    Empty,
    /// Letter typed into the current row, not yet submitted
    Typing,
    /// Cell is mid-flip during the reveal animation
    Flip,
    /// Letter matches the target at this position
    Correct,
    /// Letter occurs in the target at a different position
    Present,
    /// Letter does not occur in the target (or is over-credited)
    Absent,
}

impl CellState {
    /// Check whether this is a settled post-submission state
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Correct | Self::Present | Self::Absent)
    }
}

/// Per-position evaluation of one submitted guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation([CellState; WORD_LENGTH]);

impl Evaluation {
    /// All positions correct (winning row)
    pub const PERFECT: Self = Self([CellState::Correct; WORD_LENGTH]);

    /// Score `guess` against `target`
    ///
    /// Implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. Build a frequency map of the target's letters
    /// 2. First pass: mark exact matches `Correct` and decrement their counts
    /// 3. Second pass: for each remaining position, mark `Present` while the
    ///    letter still has count left, otherwise `Absent`
    ///
    /// The two passes must stay separate: a combined loop credits misplaced
    /// letters that an exact match later in the word should have consumed.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{CellState, Evaluation, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// let eval = Evaluation::score(&guess, &target);
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(eval.cell(2), CellState::Correct);
    /// assert_eq!(eval.cell(4), CellState::Correct);
    /// assert_eq!(eval.cell(0), CellState::Absent);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, target: &Word) -> Self {
        let mut result = [CellState::Absent; WORD_LENGTH];
        let mut remaining = target.char_counts();

        // First pass: exact position matches
        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.chars()[i] == target.chars()[i] {
                result[i] = CellState::Correct;

                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, capped by remaining counts
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] != CellState::Correct {
                let letter = guess.chars()[i];
                if let Some(count) = remaining.get_mut(&letter)
                    && *count > 0
                {
                    result[i] = CellState::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Get all cell states
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[CellState; WORD_LENGTH] {
        &self.0
    }

    /// Get the state at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn cell(&self, position: usize) -> CellState {
        self.0[position]
    }

    /// Check whether every position is correct
    #[inline]
    #[must_use]
    pub fn is_winning(&self) -> bool {
        self.0 == [CellState::Correct; WORD_LENGTH]
    }

    /// Count positions marked `Correct`
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&c| c == CellState::Correct).count()
    }

    /// Count positions marked `Present`
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&c| c == CellState::Present).count()
    }
}

impl fmt::Display for Evaluation {
    /// Formats as a compact string: `G` correct, `Y` present, `-` absent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.0 {
            let ch = match cell {
                CellState::Correct => 'G',
                CellState::Present => 'Y',
                _ => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(guess: &str, target: &str) -> Evaluation {
        Evaluation::score(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn all_absent() {
        let e = eval("abcde", "fghij");
        assert_eq!(e.cells(), &[CellState::Absent; WORD_LENGTH]);
        assert_eq!(e.count_correct(), 0);
        assert_eq!(e.count_present(), 0);
    }

    #[test]
    fn all_correct() {
        let e = eval("crane", "crane");
        assert_eq!(e, Evaluation::PERFECT);
        assert!(e.is_winning());
        assert_eq!(e.count_correct(), 5);
    }

    #[test]
    fn deterministic_on_repeated_inputs() {
        let first = eval("slate", "crane");
        let second = eval("slate", "crane");
        assert_eq!(first, second);
    }

    #[test]
    fn classic_example() {
        // CRANE vs SLATE: A and E green, R absent (SLATE has no R)
        let e = eval("crane", "slate");
        assert_eq!(
            e.cells(),
            &[
                CellState::Absent,
                CellState::Absent,
                CellState::Correct,
                CellState::Absent,
                CellState::Correct,
            ]
        );
    }

    #[test]
    fn duplicate_letters_both_credited() {
        // SPEED vs ERASE: ERASE has two E's, so both E's in SPEED are present.
        // S is at position 3 in ERASE, so present; P and D are absent.
        let e = eval("speed", "erase");
        assert_eq!(
            e.cells(),
            &[
                CellState::Present,
                CellState::Absent,
                CellState::Present,
                CellState::Present,
                CellState::Absent,
            ]
        );
    }

    #[test]
    fn duplicate_letters_capped_by_target_count() {
        // SPEED vs CREPE: the green E at position 2 consumes one of CREPE's
        // two E's, the E at position 3 consumes the other, D gets nothing.
        let e = eval("speed", "crepe");
        assert_eq!(
            e.cells(),
            &[
                CellState::Absent,
                CellState::Present,
                CellState::Correct,
                CellState::Present,
                CellState::Absent,
            ]
        );
    }

    #[test]
    fn duplicate_letters_single_occurrence_target() {
        // ALLEY vs LEMON: LEMON has one L, so only the first L in ALLEY is
        // credited present; the second L must be absent.
        let e = eval("alley", "lemon");
        assert_eq!(
            e.cells(),
            &[
                CellState::Absent,
                CellState::Present,
                CellState::Absent,
                CellState::Present,
                CellState::Absent,
            ]
        );
    }

    #[test]
    fn green_consumes_before_yellow() {
        // ROBOT vs FLOOR: first O is misplaced, second O is exact.
        // The exact match is credited in pass 1, before the first O is seen.
        let e = eval("robot", "floor");
        assert_eq!(
            e.cells(),
            &[
                CellState::Present,
                CellState::Present,
                CellState::Absent,
                CellState::Correct,
                CellState::Absent,
            ]
        );
    }

    #[test]
    fn is_winning_requires_all_positions() {
        let e = eval("crane", "crate");
        assert!(!e.is_winning());
        assert_eq!(e.count_correct(), 4);
    }

    #[test]
    fn display_compact() {
        assert_eq!(eval("crane", "slate").to_string(), "--G-G");
        assert_eq!(eval("crane", "crane").to_string(), "GGGGG");
    }

    #[test]
    fn cell_state_terminality() {
        assert!(CellState::Correct.is_terminal());
        assert!(CellState::Present.is_terminal());
        assert!(CellState::Absent.is_terminal());
        assert!(!CellState::Empty.is_terminal());
        assert!(!CellState::Typing.is_terminal());
        assert!(!CellState::Flip.is_terminal());
    }
}

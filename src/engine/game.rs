//! The game engine
//!
//! Mutates the match state in response to discrete input events. All
//! operations are no-ops on invalid preconditions: inputs come from a
//! constrained keyboard source, so idempotent safety beats strict validation.

use super::reveal::RevealTimeline;
use super::state::{GameStatus, MatchState, Snapshot};
use crate::core::{CellState, Evaluation, MAX_GUESSES, WORD_LENGTH, Word};
use crate::wordlists::WordList;

/// Discrete events from the input boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Backspace,
    Enter,
}

/// Result of a guess submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Row incomplete or game already over; nothing happened
    Ignored,
    /// Guess not in the dictionary; no state change. This outcome is the
    /// transient reject signal for the renderer to animate (shake).
    Rejected,
    /// Guess accepted and scored; the row's evaluation is committed and the
    /// state machine has already moved on
    Accepted {
        evaluation: Evaluation,
        reveal: RevealTimeline,
        status: GameStatus,
    },
}

/// Turn-based game engine over a borrowed word list
///
/// The engine is the sole writer of its match state. Renderers observe it
/// through [`Snapshot`]s taken after each mutation.
#[derive(Debug)]
pub struct GameEngine<'a> {
    words: &'a WordList,
    state: MatchState,
}

impl<'a> GameEngine<'a> {
    /// Start a new game with a random target drawn from `words`
    #[must_use]
    pub fn new(words: &'a WordList) -> Self {
        let target = words.pick_random().clone();
        Self {
            words,
            state: MatchState::new(target),
        }
    }

    /// Start a new game with a fixed target
    ///
    /// Useful for practice sessions and tests; play is otherwise identical.
    #[must_use]
    pub fn with_target(words: &'a WordList, target: Word) -> Self {
        Self {
            words,
            state: MatchState::new(target),
        }
    }

    /// Type a letter into the cursor cell
    ///
    /// Writes the uppercased letter and advances the column. Silently ignored
    /// when the row is full, the game is over, or `ch` is not an ASCII letter.
    pub fn type_letter(&mut self, ch: char) {
        if self.state.status.is_terminal() || !ch.is_ascii_alphabetic() {
            return;
        }
        let cursor = self.state.cursor;
        if cursor.col >= WORD_LENGTH {
            return;
        }

        self.state.grid[cursor.row][cursor.col] = Some(ch.to_ascii_uppercase() as u8);
        self.state.evaluations[cursor.row][cursor.col] = CellState::Typing;
        self.state.cursor.col += 1;
    }

    /// Delete the letter before the cursor
    ///
    /// No-op when the column is already 0 or the game is over.
    pub fn delete_letter(&mut self) {
        if self.state.status.is_terminal() || self.state.cursor.col == 0 {
            return;
        }

        self.state.cursor.col -= 1;
        let cursor = self.state.cursor;
        self.state.grid[cursor.row][cursor.col] = None;
        self.state.evaluations[cursor.row][cursor.col] = CellState::Empty;
    }

    /// Submit the current row as a guess
    ///
    /// Requires a full row and an in-progress game, otherwise
    /// [`SubmitOutcome::Ignored`]. A word missing from the dictionary yields
    /// [`SubmitOutcome::Rejected`] with no state change. An accepted guess is
    /// scored with the two-pass algorithm, committed to the evaluation grid,
    /// and the state machine advances immediately; the returned timeline is
    /// purely for presentation.
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        if self.state.status.is_terminal() || self.state.cursor.col != WORD_LENGTH {
            return SubmitOutcome::Ignored;
        }

        let guess_text = self.state.current_row_text();
        if !self.words.contains(&guess_text) {
            return SubmitOutcome::Rejected;
        }

        // A full row of ASCII letters always forms a valid Word, and the
        // dictionary only holds valid words; Rejected covers the rest.
        let Ok(guess) = Word::new(guess_text.as_str()) else {
            return SubmitOutcome::Rejected;
        };

        let row = self.state.cursor.row;
        let evaluation = Evaluation::score(&guess, &self.state.target);
        self.state.evaluations[row] = *evaluation.cells();

        if guess == self.state.target {
            self.state.status = GameStatus::Won;
        } else if row + 1 == MAX_GUESSES {
            self.state.status = GameStatus::Lost;
        } else {
            self.state.cursor.row += 1;
            self.state.cursor.col = 0;
        }

        SubmitOutcome::Accepted {
            evaluation,
            reveal: RevealTimeline::for_row(row, &evaluation),
            status: self.state.status,
        }
    }

    /// Discard the match and start over with a fresh random target
    ///
    /// Valid in any state.
    pub fn reset(&mut self) {
        let target = self.words.pick_random().clone();
        self.state = MatchState::new(target);
    }

    /// Dispatch an input-boundary event
    ///
    /// Returns a [`SubmitOutcome`] only for `Enter`.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<SubmitOutcome> {
        match event {
            InputEvent::Letter(ch) => {
                self.type_letter(ch);
                None
            }
            InputEvent::Backspace => {
                self.delete_letter();
                None
            }
            InputEvent::Enter => Some(self.submit_guess()),
        }
    }

    /// Read-only copy of the current match state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(&self.state)
    }

    /// Current state-machine status
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.state.status
    }
}

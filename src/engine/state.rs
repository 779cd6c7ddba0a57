//! Match state
//!
//! The single mutable value behind a game session. The engine is its only
//! writer; everything a renderer needs is copied out through [`Snapshot`].

use crate::core::{CellState, MAX_GUESSES, WORD_LENGTH, Word};

/// Position of the next editable cell
///
/// Invariant: 0 <= row <= 6, 0 <= col <= 5. `col` resets to 0 whenever the
/// row advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

/// Turn state machine
///
/// `InProgress` is initial; `Won` and `Lost` are terminal. Transitions fire
/// only from `InProgress`; terminal states change only through reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Check whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Full state of one match, owned by the engine
#[derive(Debug, Clone)]
pub(crate) struct MatchState {
    pub target: Word,
    pub grid: [[Option<u8>; WORD_LENGTH]; MAX_GUESSES],
    pub evaluations: [[CellState; WORD_LENGTH]; MAX_GUESSES],
    pub cursor: Cursor,
    pub status: GameStatus,
}

impl MatchState {
    /// Fresh state around a target word
    pub(crate) fn new(target: Word) -> Self {
        Self {
            target,
            grid: [[None; WORD_LENGTH]; MAX_GUESSES],
            evaluations: [[CellState::Empty; WORD_LENGTH]; MAX_GUESSES],
            cursor: Cursor::default(),
            status: GameStatus::InProgress,
        }
    }

    /// Letters of the current row, as typed so far
    pub(crate) fn current_row_text(&self) -> String {
        self.grid[self.cursor.row]
            .iter()
            .flatten()
            .map(|&b| b.to_ascii_lowercase() as char)
            .collect()
    }
}

/// Read-only copy of match state for rendering
///
/// Grid letters are uppercase. The target is exposed only once the status is
/// terminal, for the end-of-game reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: [[Option<char>; WORD_LENGTH]; MAX_GUESSES],
    pub evaluations: [[CellState; WORD_LENGTH]; MAX_GUESSES],
    pub cursor: Cursor,
    pub status: GameStatus,
    pub revealed_target: Option<String>,
}

impl Snapshot {
    pub(crate) fn of(state: &MatchState) -> Self {
        let mut grid = [[None; WORD_LENGTH]; MAX_GUESSES];
        for (row, src) in grid.iter_mut().zip(&state.grid) {
            for (cell, byte) in row.iter_mut().zip(src) {
                *cell = byte.map(|b| b.to_ascii_uppercase() as char);
            }
        }

        let revealed_target = state
            .status
            .is_terminal()
            .then(|| state.target.text().to_uppercase());

        Self {
            grid,
            evaluations: state.evaluations,
            cursor: state.cursor,
            status: state.status,
            revealed_target,
        }
    }

    /// Letter in a cell, or space for an empty cell
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> char {
        self.grid[row][col].unwrap_or(' ')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_is_empty_and_in_progress() {
        let state = MatchState::new(Word::new("crane").unwrap());
        assert_eq!(state.cursor, Cursor { row: 0, col: 0 });
        assert_eq!(state.status, GameStatus::InProgress);
        assert!(state.grid.iter().flatten().all(Option::is_none));
        assert!(
            state
                .evaluations
                .iter()
                .flatten()
                .all(|&c| c == CellState::Empty)
        );
    }

    #[test]
    fn current_row_text_lowercases() {
        let mut state = MatchState::new(Word::new("crane").unwrap());
        state.grid[0][0] = Some(b'S');
        state.grid[0][1] = Some(b'L');
        assert_eq!(state.current_row_text(), "sl");
    }

    #[test]
    fn snapshot_hides_target_while_in_progress() {
        let state = MatchState::new(Word::new("crane").unwrap());
        let snap = Snapshot::of(&state);
        assert_eq!(snap.revealed_target, None);
    }

    #[test]
    fn snapshot_reveals_target_when_terminal() {
        let mut state = MatchState::new(Word::new("crane").unwrap());
        state.status = GameStatus::Lost;
        let snap = Snapshot::of(&state);
        assert_eq!(snap.revealed_target.as_deref(), Some("CRANE"));
    }

    #[test]
    fn snapshot_uppercases_grid() {
        let mut state = MatchState::new(Word::new("crane").unwrap());
        state.grid[0][0] = Some(b'S');
        let snap = Snapshot::of(&state);
        assert_eq!(snap.grid[0][0], Some('S'));
        assert_eq!(snap.letter(0, 0), 'S');
        assert_eq!(snap.letter(0, 1), ' ');
    }

    #[test]
    fn status_terminality() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }
}

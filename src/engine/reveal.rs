//! Reveal timeline
//!
//! The staggered flip animation expressed as data: an ordered sequence of
//! (delay, cell, state) steps. The engine never sleeps; a renderer drives the
//! timeline with its own clock (or ignores it entirely).

use crate::core::{CellState, Evaluation, WORD_LENGTH};
use std::time::Duration;

/// Delay between the start of consecutive cell flips
pub const FLIP_STAGGER_MS: u64 = 300;

/// Time a cell spends mid-flip before settling on its terminal state
pub const FLIP_SETTLE_MS: u64 = 400;

/// Extra hold after the last cell settles, for end-of-reveal effects
const REVEAL_TAIL_MS: u64 = 500;

/// One scheduled cell-state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealStep {
    pub delay: Duration,
    pub row: usize,
    pub col: usize,
    pub state: CellState,
}

/// Ordered schedule of cell-state changes for one submitted row
///
/// Each cell flips at `col * 300ms` and settles on its terminal evaluation
/// 400ms later. Steps are sorted by delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTimeline {
    steps: Vec<RevealStep>,
}

impl RevealTimeline {
    /// Build the reveal schedule for a submitted row
    #[must_use]
    pub fn for_row(row: usize, evaluation: &Evaluation) -> Self {
        let mut steps = Vec::with_capacity(WORD_LENGTH * 2);

        for (col, &state) in evaluation.cells().iter().enumerate() {
            let flip_at = FLIP_STAGGER_MS * col as u64;
            steps.push(RevealStep {
                delay: Duration::from_millis(flip_at),
                row,
                col,
                state: CellState::Flip,
            });
            steps.push(RevealStep {
                delay: Duration::from_millis(flip_at + FLIP_SETTLE_MS),
                row,
                col,
                state,
            });
        }

        steps.sort_by_key(|step| step.delay);
        Self { steps }
    }

    /// All steps, ordered by delay
    #[must_use]
    pub fn steps(&self) -> &[RevealStep] {
        &self.steps
    }

    /// Total duration of the reveal, including the tail hold
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        let last = self.steps.last().map_or(0, |s| s.delay.as_millis() as u64);
        Duration::from_millis(last + REVEAL_TAIL_MS)
    }

    /// Row appearance at a moment during the reveal
    ///
    /// Cells whose flip has not started yet read `Empty`; mid-flip cells read
    /// `Flip`; settled cells read their terminal evaluation. Convenience for
    /// renderers polling on a frame clock.
    #[must_use]
    pub fn row_at(&self, elapsed: Duration) -> [CellState; WORD_LENGTH] {
        let mut row = [CellState::Empty; WORD_LENGTH];
        for step in &self.steps {
            if step.delay <= elapsed {
                row[step.col] = step.state;
            }
        }
        row
    }

    /// Check whether every cell has settled by `elapsed`
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.steps.last().is_none_or(|s| s.delay <= elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn timeline() -> (RevealTimeline, Evaluation) {
        let eval = Evaluation::score(
            &Word::new("crane").unwrap(),
            &Word::new("slate").unwrap(),
        );
        (RevealTimeline::for_row(2, &eval), eval)
    }

    #[test]
    fn two_steps_per_cell() {
        let (t, _) = timeline();
        assert_eq!(t.steps().len(), WORD_LENGTH * 2);
        assert!(t.steps().iter().all(|s| s.row == 2));
    }

    #[test]
    fn steps_sorted_by_delay() {
        let (t, _) = timeline();
        let delays: Vec<_> = t.steps().iter().map(|s| s.delay).collect();
        let mut sorted = delays.clone();
        sorted.sort();
        assert_eq!(delays, sorted);
    }

    #[test]
    fn flip_precedes_settle_per_cell() {
        let (t, eval) = timeline();
        for col in 0..WORD_LENGTH {
            let cell_steps: Vec<_> = t.steps().iter().filter(|s| s.col == col).collect();
            assert_eq!(cell_steps.len(), 2);
            assert_eq!(cell_steps[0].state, CellState::Flip);
            assert_eq!(cell_steps[1].state, eval.cell(col));
            assert_eq!(
                cell_steps[1].delay - cell_steps[0].delay,
                Duration::from_millis(FLIP_SETTLE_MS)
            );
        }
    }

    #[test]
    fn row_at_before_start_is_empty() {
        let (t, _) = timeline();
        // Flip of cell 0 fires at exactly 0ms, so probe cannot be at 0
        let row = t.row_at(Duration::ZERO);
        assert_eq!(row[0], CellState::Flip);
        assert_eq!(row[4], CellState::Empty);
    }

    #[test]
    fn row_at_mid_reveal_mixes_states() {
        let (t, eval) = timeline();
        // At 700ms: cell 0 settled (400), cell 1 settled (700), cell 2
        // flipping (600), cell 3 not started (900)
        let row = t.row_at(Duration::from_millis(700));
        assert_eq!(row[0], eval.cell(0));
        assert_eq!(row[1], eval.cell(1));
        assert_eq!(row[2], CellState::Flip);
        assert_eq!(row[3], CellState::Empty);
    }

    #[test]
    fn row_at_end_matches_evaluation() {
        let (t, eval) = timeline();
        let row = t.row_at(t.total_duration());
        assert_eq!(&row, eval.cells());
        assert!(t.is_finished(t.total_duration()));
    }

    #[test]
    fn total_duration_covers_last_settle() {
        let (t, _) = timeline();
        // Last settle: 4 * 300 + 400 = 1600ms, plus the 500ms tail
        assert_eq!(t.total_duration(), Duration::from_millis(2100));
        assert!(!t.is_finished(Duration::from_millis(1599)));
        assert!(t.is_finished(Duration::from_millis(1600)));
    }
}

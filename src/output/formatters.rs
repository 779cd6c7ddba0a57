//! Formatting utilities for terminal output

use crate::core::{CellState, Evaluation};
use colored::Colorize;

/// Format an evaluation as an emoji string
#[must_use]
pub fn evaluation_to_emoji(evaluation: &Evaluation) -> String {
    let mut result = String::with_capacity(20);
    for &cell in evaluation.cells() {
        result.push(match cell {
            CellState::Correct => '🟩',
            CellState::Present => '🟨',
            _ => '⬜',
        });
    }
    result
}

/// Format a submitted row as colored uppercase letters
///
/// Correct letters render on green, present on yellow, absent on dark gray.
#[must_use]
pub fn colorize_row(guess: &str, evaluation: &Evaluation) -> String {
    guess
        .chars()
        .zip(evaluation.cells())
        .map(|(ch, &cell)| {
            let letter = format!(" {} ", ch.to_ascii_uppercase());
            let colored = match cell {
                CellState::Correct => letter.black().on_green(),
                CellState::Present => letter.black().on_yellow(),
                _ => letter.white().on_bright_black(),
            };
            colored.bold().to_string()
        })
        .collect()
}

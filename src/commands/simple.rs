//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Each typed line is fed to the engine as
//! letter events followed by Enter, so the engine sees the same input
//! boundary as the TUI.

use crate::core::{MAX_GUESSES, WORD_LENGTH};
use crate::engine::{GameEngine, GameStatus, InputEvent, SubmitOutcome};
use crate::output::formatters::{colorize_row, evaluation_to_emoji};
use crate::wordlists::WordList;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(words: &WordList) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.");
    println!("After each guess, every letter is marked:\n");
    println!("  🟩 correct position");
    println!("  🟨 in the word, wrong position");
    println!("  ⬜ not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new word\n");

    let mut engine = GameEngine::new(words);
    let mut submitted: Vec<String> = Vec::new();

    loop {
        let attempt = engine.snapshot().cursor.row + 1;
        let input = get_user_input(&format!("Guess {attempt}/{MAX_GUESSES}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                engine.reset();
                submitted.clear();
                println!("\n🔄 New game started!\n");
                continue;
            }
            guess => {
                if guess.len() != WORD_LENGTH || !guess.chars().all(|c| c.is_ascii_alphabetic()) {
                    println!("❌ Enter exactly {WORD_LENGTH} letters.\n");
                    continue;
                }

                for ch in guess.chars() {
                    engine.handle_input(InputEvent::Letter(ch));
                }
                let outcome = engine
                    .handle_input(InputEvent::Enter)
                    .unwrap_or(SubmitOutcome::Ignored);

                match outcome {
                    SubmitOutcome::Rejected => {
                        // Clear the rejected row so the next line starts fresh
                        for _ in 0..WORD_LENGTH {
                            engine.handle_input(InputEvent::Backspace);
                        }
                        println!("❌ '{}' is not in the word list.\n", guess.to_uppercase());
                    }
                    SubmitOutcome::Accepted {
                        evaluation, status, ..
                    } => {
                        submitted.push(guess.to_string());
                        println!(
                            "\n   {}  {}\n",
                            colorize_row(guess, &evaluation),
                            evaluation_to_emoji(&evaluation)
                        );

                        match status {
                            GameStatus::Won => {
                                print_win_banner(&engine, &submitted);
                                if !ask_play_again()? {
                                    println!("\n👋 Thanks for playing!\n");
                                    return Ok(());
                                }
                                engine.reset();
                                submitted.clear();
                                println!("\n🔄 New game started!\n");
                            }
                            GameStatus::Lost => {
                                print_loss_banner(&engine);
                                if !ask_play_again()? {
                                    println!("\n👋 Thanks for playing!\n");
                                    return Ok(());
                                }
                                engine.reset();
                                submitted.clear();
                                println!("\n🔄 New game started!\n");
                            }
                            GameStatus::InProgress => {}
                        }
                    }
                    SubmitOutcome::Ignored => {}
                }
            }
        }
    }
}

fn print_win_banner(engine: &GameEngine<'_>, submitted: &[String]) {
    let turn = submitted.len();

    println!("{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉 🎊 ✨  Y O U   W O N !  ✨ 🎊 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match turn {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Phew, that was close!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solved in {} {}",
        turn.to_string().bright_cyan().bold(),
        if turn == 1 { "guess" } else { "guesses" }
    );

    print_share_grid(engine, submitted);
    println!("\n{}", "═".repeat(70).bright_cyan());
}

fn print_loss_banner(engine: &GameEngine<'_>) {
    let snap = engine.snapshot();
    let solution = snap.revealed_target.unwrap_or_default();

    println!("{}", "═".repeat(70).bright_cyan());
    println!("{}", "  Out of guesses!  ".bright_red().bold());
    println!(
        "\n  The word was: {}",
        solution.bright_yellow().bold()
    );
    println!("\n{}", "═".repeat(70).bright_cyan());
}

/// Emoji recap of every submitted row, shareable Wordle-style
fn print_share_grid(engine: &GameEngine<'_>, submitted: &[String]) {
    use crate::core::CellState;

    let snap = engine.snapshot();
    println!("\n  Your game:");
    for (i, guess) in submitted.iter().enumerate() {
        let emoji: String = snap.evaluations[i]
            .iter()
            .map(|&c| match c {
                CellState::Correct => '🟩',
                CellState::Present => '🟨',
                _ => '⬜',
            })
            .collect();
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            guess.to_uppercase().bright_white().bold(),
            emoji
        );
    }
}

fn ask_play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

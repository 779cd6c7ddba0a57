//! TUI application state and logic

use crate::core::{CellState, MAX_GUESSES, WORD_LENGTH};
use crate::engine::{GameEngine, GameStatus, InputEvent, RevealTimeline, SubmitOutcome};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the shake message for a rejected guess stays visible
const SHAKE_MS: u64 = 1500;

/// Frame poll interval; bounds animation latency
const TICK_MS: u64 = 50;

/// A reveal animation in flight for one submitted row
pub struct ActiveReveal {
    pub row: usize,
    pub timeline: RevealTimeline,
    pub started: Instant,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
    pub posted: Instant,
    pub transient: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics, renderer-layer state
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

/// Application state
pub struct App<'a> {
    pub engine: GameEngine<'a>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub reveal: Option<ActiveReveal>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList) -> Self {
        let mut app = Self {
            engine: GameEngine::new(words),
            messages: Vec::new(),
            stats: Statistics::default(),
            reveal: None,
            should_quit: false,
        };
        app.add_message("Guess the hidden 5-letter word!", MessageStyle::Info, false);
        app.add_message(
            "Type letters, Backspace to erase, Enter to submit.",
            MessageStyle::Info,
            false,
        );
        app
    }

    /// Route a key press into the engine and react to the outcome
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if code == KeyCode::Esc {
            self.should_quit = true;
            return;
        }

        if self.engine.status().is_terminal() {
            // Only the game-over keys are live on a finished board
            match code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char(c) => self.dispatch(InputEvent::Letter(c)),
            KeyCode::Backspace => self.dispatch(InputEvent::Backspace),
            KeyCode::Enter => self.dispatch(InputEvent::Enter),
            _ => {}
        }
    }

    fn dispatch(&mut self, input: InputEvent) {
        let Some(outcome) = self.engine.handle_input(input) else {
            return;
        };

        match outcome {
            SubmitOutcome::Ignored => {}
            SubmitOutcome::Rejected => {
                self.add_message("Not in word list!", MessageStyle::Error, true);
            }
            SubmitOutcome::Accepted { reveal, status, .. } => {
                self.reveal = Some(ActiveReveal {
                    row: reveal.steps().first().map_or(0, |s| s.row),
                    timeline: reveal,
                    started: Instant::now(),
                });

                match status {
                    GameStatus::Won => {
                        let guesses = self.engine.snapshot().cursor.row + 1;
                        self.stats.total_games += 1;
                        self.stats.games_won += 1;
                        if guesses <= MAX_GUESSES {
                            self.stats.guess_distribution[guesses] += 1;
                        }
                        let celebration = match guesses {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success, false);
                        self.add_message(
                            "Press 'n' for new game or 'q' to quit.",
                            MessageStyle::Info,
                            false,
                        );
                    }
                    GameStatus::Lost => {
                        self.stats.total_games += 1;
                        self.add_message("Out of guesses!", MessageStyle::Error, false);
                        self.add_message(
                            "Press 'n' for new game or 'q' to quit.",
                            MessageStyle::Info,
                            false,
                        );
                    }
                    GameStatus::InProgress => {}
                }
            }
        }
    }

    pub fn new_game(&mut self) {
        self.engine.reset();
        self.reveal = None;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info, false);
    }

    /// Drop expired transient messages and finished reveals
    pub fn tick(&mut self) {
        let shake = Duration::from_millis(SHAKE_MS);
        self.messages
            .retain(|m| !m.transient || m.posted.elapsed() < shake);

        if let Some(reveal) = &self.reveal
            && reveal.timeline.is_finished(reveal.started.elapsed())
        {
            self.reveal = None;
        }
    }

    /// Cell state as the renderer should draw it right now
    ///
    /// Rows under an active reveal blend the timeline into the committed
    /// evaluation; everything else comes straight from the snapshot.
    #[must_use]
    pub fn display_row(&self, row: usize) -> [CellState; WORD_LENGTH] {
        let snapshot = self.engine.snapshot();
        if let Some(reveal) = &self.reveal
            && reveal.row == row
        {
            return reveal.timeline.row_at(reveal.started.elapsed());
        }
        snapshot.evaluations[row]
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle, transient: bool) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
            posted: Instant::now(),
            transient,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so reveal animation frames advance without input
        if event::poll(Duration::from_millis(TICK_MS))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

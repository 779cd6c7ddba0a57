//! TUI rendering with ratatui
//!
//! Draws the board from engine snapshots plus the app's animation overlay.

use super::app::{App, MessageStyle};
use crate::core::{CellState, MAX_GUESSES, WORD_LENGTH};
use crate::engine::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                     // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Min(5),                        // Messages
            Constraint::Length(3),                     // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.engine.snapshot();

    let mut lines = Vec::with_capacity(MAX_GUESSES);
    for row in 0..MAX_GUESSES {
        let states = app.display_row(row);
        let mut spans = Vec::with_capacity(WORD_LENGTH * 2);

        for col in 0..WORD_LENGTH {
            let letter = snapshot.letter(row, col);
            spans.push(Span::styled(
                format!(" {letter} "),
                cell_style(states[col]),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans).alignment(Alignment::Center));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn cell_style(state: CellState) -> Style {
    match state {
        CellState::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellState::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellState::Absent => Style::default()
            .fg(Color::White)
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
        CellState::Flip => Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        CellState::Typing => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        CellState::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .messages
        .iter()
        .map(|m| {
            let style = match m.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                MessageStyle::Error => Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            };
            Line::from(Span::styled(m.text.clone(), style))
        })
        .collect();

    let messages = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Messages ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(messages, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let snapshot = app.engine.snapshot();

    let text = match snapshot.status {
        GameStatus::InProgress => format!(
            "Guess {}/{MAX_GUESSES} │ {} played, {} won │ Esc: quit",
            snapshot.cursor.row + 1,
            app.stats.total_games,
            app.stats.games_won,
        ),
        GameStatus::Won => format!(
            "You won! │ {} played, {} won │ n: new game  q: quit",
            app.stats.total_games, app.stats.games_won,
        ),
        GameStatus::Lost => {
            let solution = snapshot.revealed_target.as_deref().unwrap_or("?????");
            format!(
                "The word was {solution} │ {} played, {} won │ n: new game  q: quit",
                app.stats.total_games, app.stats.games_won,
            )
        }
    };

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}

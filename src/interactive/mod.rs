//! Interactive TUI interface
//!
//! The external renderer/input collaborator: translates key events into
//! engine inputs and animates engine snapshots. Owns all timing; the engine
//! never blocks on animation.

mod app;
mod rendering;

pub use app::{App, run_tui};

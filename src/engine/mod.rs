//! Game engine
//!
//! Owns the full match state and implements the guess-submission algorithm
//! and the turn state machine. Renderers consume read-only snapshots and the
//! reveal timeline; they never mutate engine state.

mod game;
mod reveal;
mod state;

pub use game::{GameEngine, InputEvent, SubmitOutcome};
pub use reveal::{FLIP_SETTLE_MS, FLIP_STAGGER_MS, RevealStep, RevealTimeline};
pub use state::{Cursor, GameStatus, Snapshot};

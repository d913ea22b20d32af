//! Game engine and drop outcomes.
//!
//! A host constructs a `GameEngine`, forwards each column choice to
//! `attempt_drop`, and renders from the returned `DropOutcome` plus the
//! read-only queries (`grid`, `current_player`, `is_game_over`).

mod engine;
mod outcome;

pub use engine::GameEngine;
pub use outcome::{DropOutcome, GameStatus, IgnoredReason, Placement};

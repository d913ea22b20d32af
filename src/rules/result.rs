//! Final result of a game.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Board filled with no line of four.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Message shown to players when the game ends.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            GameResult::Winner(player) => format!("{} won!", player),
            GameResult::Tie => "Tie!".to_string(),
        }
    }
}

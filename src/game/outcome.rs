//! What a drop reports back to the caller.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::PlayerId;
use crate::rules::GameResult;

/// Why a drop was discarded without touching the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IgnoredReason {
    /// The game already ended in a win or a tie.
    GameOver,
    /// The chosen column has no empty cell.
    ColumnFull,
    /// The column index is not a column of this board.
    ColumnOutOfRange,
}

/// Result of one `GameEngine::attempt_drop` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DropOutcome {
    /// Piece placed, no decision yet; the turn passed to the other player.
    Continue,
    /// Piece placed and completed a line of four for this player.
    Won(PlayerId),
    /// Piece placed and filled the board without a winner.
    Tie,
    /// Nothing happened.
    Ignored(IgnoredReason),
}

impl DropOutcome {
    /// Check if this outcome ended the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, DropOutcome::Won(_) | DropOutcome::Tie)
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, DropOutcome::Ignored(_))
    }

    /// Check if a piece was placed.
    #[must_use]
    pub fn placed_piece(&self) -> bool {
        !self.is_ignored()
    }

    /// The game result, for terminal outcomes.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self {
            DropOutcome::Won(player) => Some(GameResult::Winner(*player)),
            DropOutcome::Tie => Some(GameResult::Tie),
            DropOutcome::Continue | DropOutcome::Ignored(_) => None,
        }
    }

    /// "Player N won!" or "Tie!" for terminal outcomes.
    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        self.result().map(|result| result.message())
    }
}

/// Where the engine currently stands.
///
/// `Won` and `Tie` are absorbing: once reached, no drop leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for this player's move.
    Active(PlayerId),
    Won(PlayerId),
    Tie,
}

impl GameStatus {
    #[must_use]
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::Active(_))
    }
}

/// A piece that was placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub position: Position,
    pub player: PlayerId,
}

//! # connect-four
//!
//! Rules engine and turn state machine for Connect Four.
//!
//! Two players alternately drop pieces into the columns of a grid. The first
//! to line up four of their own pieces horizontally, vertically or diagonally
//! wins; a full grid with no such line is a tie.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: The engine holds state and rules only. Rendering, input
//!    handling and player setup belong to the host, which calls in with column
//!    indices and reads results back out.
//!
//! 2. **Rejections are outcomes**: Dropping into a full column or after the
//!    game ended returns `DropOutcome::Ignored`, never an error.
//!
//! 3. **One game, one engine**: There is no reset. A new game is a new
//!    `GameEngine` (see `GameEngine::restart`).
//!
//! ## Modules
//!
//! - `core`: Player identifiers, configuration, configuration errors
//! - `board`: Positions, cells and the grid with gravity
//! - `rules`: Line directions, win detectors, game results
//! - `game`: The engine and its drop outcomes
//!
//! ## Example
//!
//! ```
//! use connect_four::{DropOutcome, GameEngine, Player, PlayerId};
//!
//! let mut game = GameEngine::new(6, 7, Player::first("red"), Player::second("yellow"));
//!
//! for _ in 0..3 {
//!     assert_eq!(game.attempt_drop(0), DropOutcome::Continue);
//!     assert_eq!(game.attempt_drop(1), DropOutcome::Continue);
//! }
//! let outcome = game.attempt_drop(0);
//!
//! assert_eq!(outcome, DropOutcome::Won(PlayerId::ONE));
//! assert_eq!(outcome.end_message().as_deref(), Some("Player 1 won!"));
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, Player, PlayerId};

pub use crate::board::{Cell, Grid, Position};

pub use crate::rules::{
    AnchoredQuadScan, Direction, GameResult, Line, PlacedPieceScan, WinDetector,
};

pub use crate::game::{DropOutcome, GameEngine, GameStatus, IgnoredReason, Placement};

//! The game engine: grid, turn pointer and the drop state machine.
//!
//! ## State Machine
//!
//! ```text
//! Active(p) --drop, no decision--> Active(other)
//! Active(p) --drop, line of four--> Won(p)
//! Active(p) --drop, board full---> Tie
//! Won / Tie --any drop-----------> unchanged (Ignored)
//! ```
//!
//! A new game is a new `GameEngine`. `restart` builds one with the same
//! dimensions and players; nothing from the old grid is carried over.

use smallvec::SmallVec;
use tracing::{debug, info, trace, warn};

use super::outcome::{DropOutcome, GameStatus, IgnoredReason, Placement};
use crate::board::{Grid, Position};
use crate::core::{ConfigError, GameConfig, Player};
use crate::rules::{AnchoredQuadScan, GameResult, Line, WinDetector};

/// Rules engine for one game of Connect Four.
///
/// Generic over the win detection strategy; the default is the exhaustive
/// `AnchoredQuadScan`.
///
/// ## Example
///
/// ```
/// use connect_four::core::Player;
/// use connect_four::game::{DropOutcome, GameEngine};
///
/// let mut game = GameEngine::new(6, 7, Player::first("red"), Player::second("yellow"));
///
/// assert_eq!(game.attempt_drop(3), DropOutcome::Continue);
/// assert_eq!(game.current_player().label, "yellow");
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine<D = AnchoredQuadScan> {
    grid: Grid,
    players: [Player; 2],
    /// Index into `players` of whoever moves next.
    current: usize,
    result: Option<GameResult>,
    winning_line: Option<Line>,
    last_placement: Option<Placement>,
    detector: D,
}

impl GameEngine {
    /// Start a game on an empty `height` × `width` grid. Player one moves first.
    ///
    /// Nothing is validated. Use `from_config` for a checked construction.
    #[must_use]
    pub fn new(height: usize, width: usize, player1: Player, player2: Player) -> Self {
        Self::with_detector(height, width, player1, player2, AnchoredQuadScan)
    }

    /// Start a game after validating the configuration and player ids.
    pub fn from_config(
        config: GameConfig,
        player1: Player,
        player2: Player,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if player1.id == player2.id {
            return Err(ConfigError::DuplicatePlayerId(player1.id));
        }
        Ok(Self::new(config.height, config.width, player1, player2))
    }
}

impl<D: WinDetector> GameEngine<D> {
    /// Start a game using a specific win detector.
    #[must_use]
    pub fn with_detector(
        height: usize,
        width: usize,
        player1: Player,
        player2: Player,
        detector: D,
    ) -> Self {
        debug!(height, width, first = %player1.id, second = %player2.id, "new game");

        Self {
            grid: Grid::new(height, width),
            players: [player1, player2],
            current: 0,
            result: None,
            winning_line: None,
            last_placement: None,
            detector,
        }
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Checks, in order: game already over, column off the board, column
    /// full. Any of those leaves every piece of state untouched. Otherwise
    /// the piece lands, and the engine checks for a win, then for a full
    /// board, and only then passes the turn.
    pub fn attempt_drop(&mut self, column: usize) -> DropOutcome {
        if self.is_game_over() {
            trace!(column, "drop ignored: game over");
            return DropOutcome::Ignored(IgnoredReason::GameOver);
        }

        if column >= self.grid.width() {
            warn!(column, width = self.grid.width(), "drop ignored: column out of range");
            return DropOutcome::Ignored(IgnoredReason::ColumnOutOfRange);
        }

        let Some(row) = self.find_landing_row(column) else {
            trace!(column, "drop ignored: column full");
            return DropOutcome::Ignored(IgnoredReason::ColumnFull);
        };

        let mover = self.current_player().id;
        let position = Position::new(row, column);
        self.grid.place(position, mover);
        self.last_placement = Some(Placement {
            position,
            player: mover,
        });
        debug!(player = %mover, row, column, "piece dropped");

        if let Some(line) = self.detector.find_winning_line(&self.grid, mover, position) {
            self.winning_line = Some(line);
            self.finish(GameResult::Winner(mover));
            return DropOutcome::Won(mover);
        }

        if self.grid.is_full() {
            self.finish(GameResult::Tie);
            return DropOutcome::Tie;
        }

        self.current = 1 - self.current;
        DropOutcome::Continue
    }

    fn finish(&mut self, result: GameResult) {
        info!(?result, moves = self.grid.occupied_count(), "game over");
        self.result = Some(result);
    }

    /// A fresh game with the same board size, players and detector.
    #[must_use]
    pub fn restart(&self) -> Self
    where
        D: Clone,
    {
        let [player1, player2] = self.players.clone();
        Self::with_detector(
            self.grid.height(),
            self.grid.width(),
            player1,
            player2,
            self.detector.clone(),
        )
    }
}

impl<D> GameEngine<D> {
    /// Row a piece dropped into `column` would land in, or `None` if the
    /// column is full.
    #[must_use]
    pub fn find_landing_row(&self, column: usize) -> Option<usize> {
        self.grid.find_landing_row(column)
    }

    /// Check if the current player owns any line of four on the board.
    ///
    /// Exhaustive scan, independent of the configured detector. After a
    /// winning drop the current player is the winner, so this stays true.
    #[must_use]
    pub fn check_for_win(&self) -> bool {
        AnchoredQuadScan::scan(&self.grid, self.current_player().id).is_some()
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.grid.is_full()
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Player who moves next, or who made the final move once the game is
    /// over.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Both players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.result {
            None => GameStatus::Active(self.current_player().id),
            Some(GameResult::Winner(player)) => GameStatus::Won(player),
            Some(GameResult::Tie) => GameStatus::Tie,
        }
    }

    /// The four cells that decided the game, if it was won.
    #[must_use]
    pub fn winning_line(&self) -> Option<&Line> {
        self.winning_line.as_ref()
    }

    /// The most recently placed piece.
    #[must_use]
    pub fn last_placement(&self) -> Option<Placement> {
        self.last_placement
    }

    /// Columns that still accept a piece. Empty once the game is over.
    #[must_use]
    pub fn legal_columns(&self) -> SmallVec<[usize; 8]> {
        if self.is_game_over() {
            return SmallVec::new();
        }
        (0..self.grid.width())
            .filter(|&col| !self.grid.is_column_full(col))
            .collect()
    }
}

//! Win detection strategies.
//!
//! Both strategies answer the same question: does the mover own four aligned
//! cells? `AnchoredQuadScan` checks every line on the board and is the
//! reference. `PlacedPieceScan` only looks at lines through the piece that
//! was just placed; it agrees with the reference whenever the mover had no
//! winning line before that placement, which the engine guarantees because a
//! win ends the game.

use crate::board::{Grid, Position};
use crate::core::PlayerId;

use super::line::{Direction, Line, CONNECT};

/// Strategy for finding a winning line.
pub trait WinDetector {
    /// Find a line of four cells all owned by `mover`.
    ///
    /// `placed` is the cell the mover just filled. Strategies are free to
    /// ignore it.
    fn find_winning_line(&self, grid: &Grid, mover: PlayerId, placed: Position) -> Option<Line>;
}

/// Exhaustive scan of every anchored four-cell line.
///
/// Visits cells in row-major order and, per cell, tries the directions in
/// `Direction::ALL` order. O(height × width) per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnchoredQuadScan;

impl AnchoredQuadScan {
    /// Find any winning line for `player` on `grid`.
    #[must_use]
    pub fn scan(grid: &Grid, player: PlayerId) -> Option<Line> {
        grid.positions()
            .flat_map(|anchor| {
                Direction::ALL
                    .into_iter()
                    .filter_map(move |direction| Line::anchored(grid, anchor, direction))
            })
            .find(|line| line.is_owned_by(grid, player))
    }
}

impl WinDetector for AnchoredQuadScan {
    fn find_winning_line(&self, grid: &Grid, mover: PlayerId, _placed: Position) -> Option<Line> {
        Self::scan(grid, mover)
    }
}

/// Scan of the four lines through the last placed piece.
///
/// For each direction, counts the mover's pieces on both sides of `placed`
/// (at most three per side) and reports the four-cell line that starts at the
/// farthest backward piece.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlacedPieceScan;

impl PlacedPieceScan {
    /// Length of the run of `player`'s pieces from `from` (exclusive) going
    /// `sign` steps along `direction`, capped at `CONNECT - 1`.
    fn run_length(
        grid: &Grid,
        player: PlayerId,
        from: Position,
        direction: Direction,
        sign: isize,
    ) -> usize {
        (1..CONNECT as isize)
            .take_while(|&n| {
                direction
                    .step(grid, from, sign * n)
                    .is_some_and(|pos| grid.get(pos).is_owned_by(player))
            })
            .count()
    }
}

impl WinDetector for PlacedPieceScan {
    fn find_winning_line(&self, grid: &Grid, mover: PlayerId, placed: Position) -> Option<Line> {
        if !grid.try_get(placed)?.is_owned_by(mover) {
            return None;
        }

        Direction::ALL.into_iter().find_map(|direction| {
            let backward = Self::run_length(grid, mover, placed, direction, -1);
            let forward = Self::run_length(grid, mover, placed, direction, 1);
            if backward + 1 + forward < CONNECT {
                return None;
            }
            let start = direction.step(grid, placed, -(backward as isize))?;
            Line::anchored(grid, start, direction)
        })
    }
}

//! Scan directions and four-cell lines.

use serde::{Deserialize, Serialize};

use crate::board::{Grid, Position};
use crate::core::PlayerId;

/// Number of aligned pieces needed to win.
pub const CONNECT: usize = 4;

/// One of the four line orientations.
///
/// Each is expressed as the step taken from an anchor cell. Only "forward"
/// steps are listed; the opposite orientations are covered by anchoring at
/// the other end of the line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Rightward along a row.
    Horizontal,
    /// Downward along a column.
    Vertical,
    /// Down and to the right.
    DiagonalDownRight,
    /// Down and to the left.
    DiagonalDownLeft,
}

impl Direction {
    /// All directions, in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row, column) step for one cell along this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }

    /// Position `steps` cells from `from`, if it is on `grid`.
    #[must_use]
    pub fn step(self, grid: &Grid, from: Position, steps: isize) -> Option<Position> {
        let (d_row, d_col) = self.delta();
        from.offset(d_row * steps, d_col * steps)
            .filter(|&pos| grid.contains(pos))
    }
}

/// Four consecutive cells along one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Cells from the anchor outward.
    pub cells: [Position; CONNECT],

    pub direction: Direction,
}

impl Line {
    /// The four cells starting at `anchor` and going along `direction`.
    ///
    /// Returns `None` if any of them falls off the grid.
    #[must_use]
    pub fn anchored(grid: &Grid, anchor: Position, direction: Direction) -> Option<Line> {
        let mut cells = [anchor; CONNECT];
        for (i, cell) in cells.iter_mut().enumerate() {
            *cell = direction.step(grid, anchor, i as isize)?;
        }
        Some(Line { cells, direction })
    }

    /// Check if every cell holds a piece of `player`.
    #[must_use]
    pub fn is_owned_by(&self, grid: &Grid, player: PlayerId) -> bool {
        self.cells.iter().all(|&pos| grid.get(pos).is_owned_by(player))
    }

    /// Check if `pos` is one of the line's cells.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

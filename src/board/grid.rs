//! The playing field.
//!
//! ## Layout
//!
//! `height` rows × `width` columns stored row-major in a flat `Vec<Cell>`.
//! Row 0 is the top and row `height - 1` the bottom, so gravity fills each
//! column from the highest row index down to 0.
//!
//! ## Monotonic cells
//!
//! A cell goes from `Empty` to `Occupied` once and never changes again. The
//! only writer is `Grid::place`, which asserts this in debug builds.

use serde::{Deserialize, Serialize};

use super::Position;
use crate::core::PlayerId;

/// Contents of one grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    /// Owner of the piece in this cell, if any.
    #[must_use]
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Check if this cell holds a piece of `player`.
    #[must_use]
    pub fn is_owned_by(self, player: PlayerId) -> bool {
        self == Cell::Occupied(player)
    }
}

/// Deserialized grid whose cell count does not match its dimensions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("grid is {height}x{width} but has {cells} cells")]
pub struct GridShapeError {
    pub height: usize,
    pub width: usize,
    pub cells: usize,
}

/// Unchecked wire form of `Grid`.
#[derive(Deserialize)]
struct GridRepr {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl TryFrom<GridRepr> for Grid {
    type Error = GridShapeError;

    fn try_from(repr: GridRepr) -> Result<Self, Self::Error> {
        if repr.height.checked_mul(repr.width) != Some(repr.cells.len()) {
            return Err(GridShapeError {
                height: repr.height,
                width: repr.width,
                cells: repr.cells.len(),
            });
        }
        Ok(Self {
            height: repr.height,
            width: repr.width,
            cells: repr.cells,
        })
    }
}

/// A `height` × `width` Connect Four grid.
///
/// ## Example
///
/// ```
/// use connect_four::board::{Cell, Grid, Position};
/// use connect_four::core::PlayerId;
///
/// let mut grid = Grid::new(6, 7);
/// assert_eq!(grid.find_landing_row(3), Some(5));
///
/// grid.place(Position::new(5, 3), PlayerId::ONE);
/// assert_eq!(grid.get(Position::new(5, 3)), Cell::Occupied(PlayerId::ONE));
/// assert_eq!(grid.find_landing_row(3), Some(4));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRepr")]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    /// Build a grid from explicit rows, top row first.
    ///
    /// Cells are taken as given; no gravity is applied. Panics if the rows
    /// have different lengths.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "All rows must have the same width"
        );

        Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }

    /// Get a cell. Panics if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        assert!(self.contains(pos), "Position {} is off the board", pos);
        self.cells[self.index(pos)]
    }

    /// Get a cell, or `None` if `pos` is off the board.
    #[must_use]
    pub fn try_get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.cells[self.index(pos)])
    }

    /// Put `player`'s piece at `pos`.
    ///
    /// The cell must be empty. No gravity is applied here; callers resolve the
    /// row with `find_landing_row` first.
    pub fn place(&mut self, pos: Position, player: PlayerId) {
        assert!(self.contains(pos), "Position {} is off the board", pos);
        let idx = self.index(pos);
        debug_assert!(
            self.cells[idx].is_empty(),
            "Cell {} is already occupied",
            pos
        );
        self.cells[idx] = Cell::Occupied(player);
    }

    /// Row a piece dropped into `col` would settle in.
    ///
    /// Scans from the bottom row upward and returns the first empty row, or
    /// `None` if the column is full or `col` is not a column of this grid.
    #[must_use]
    pub fn find_landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.get(Position::new(row, col)).is_empty())
    }

    /// Check if a column has no empty cell left.
    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_landing_row(col).is_none()
    }

    /// Check if every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Iterate over rows, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Iterate over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                match cell {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(player) => write!(f, "{}", player.raw())?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Board representation: positions, cells and the grid.
//!
//! The grid knows about gravity (`find_landing_row`) and fullness but nothing
//! about turns or wins; those live in `rules` and `game`.

pub mod position;
pub mod grid;

pub use position::Position;
pub use grid::{Cell, Grid, GridShapeError};

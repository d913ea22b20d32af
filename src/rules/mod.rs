//! Win detection and game results.
//!
//! The engine calls into a `WinDetector` after every placement. Two
//! strategies ship with the crate:
//! - `AnchoredQuadScan`: every four-cell line anchored at every cell
//! - `PlacedPieceScan`: only the lines through the piece just placed

pub mod line;
pub mod detector;
pub mod result;

pub use line::{Direction, Line, CONNECT};
pub use detector::{AnchoredQuadScan, PlacedPieceScan, WinDetector};
pub use result::GameResult;

//! Errors for the validated construction path.
//!
//! Drops never fail; see `DropOutcome::Ignored` for rejected moves.

use super::PlayerId;

/// Errors reported by `GameConfig::validate` and `GameEngine::from_config`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board height must be at least 1")]
    ZeroHeight,

    #[error("board width must be at least 1")]
    ZeroWidth,

    #[error("both players are {0}")]
    DuplicatePlayerId(PlayerId),
}

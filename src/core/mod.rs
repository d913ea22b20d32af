//! Core types: players, configuration, configuration errors.

pub mod player;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId};
pub use config::{GameConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use error::ConfigError;

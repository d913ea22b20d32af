//! Game configuration.
//!
//! Hosts describe the board via `GameConfig` and hand it to
//! `GameEngine::from_config`, which validates it. `GameEngine::new` takes raw
//! dimensions and skips validation.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Classic board height.
pub const DEFAULT_HEIGHT: usize = 6;

/// Classic board width.
pub const DEFAULT_WIDTH: usize = 7;

/// Board dimensions.
///
/// ## Example
///
/// ```
/// use connect_four::core::GameConfig;
///
/// let config = GameConfig::default().with_width(9);
/// assert_eq!(config.height, 6);
/// assert_eq!(config.width, 9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of rows.
    pub height: usize,

    /// Number of columns.
    pub width: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
        }
    }
}

impl GameConfig {
    /// Create a configuration with explicit dimensions.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Set the number of rows.
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    /// Set the number of columns.
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Check that both dimensions are non-zero.
    ///
    /// Boards under 4 in a dimension are accepted; they just never produce a
    /// win along that dimension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        Ok(())
    }
}

//! Player identification and display metadata.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two seats, `1` or `2`.
//!
//! ## Player
//!
//! A `PlayerId` plus an opaque display label (usually a color). The engine
//! only reads the id; the label is carried for the presentation layer.

use serde::{Deserialize, Serialize};

/// Player identifier.
///
/// Identifiers are 1-based to match the printed "Player 1" / "Player 2".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The player who moves first.
    pub const ONE: PlayerId = PlayerId(1);

    /// The player who moves second.
    pub const TWO: PlayerId = PlayerId(2);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw identifier.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A participant in a game.
///
/// Value-like record supplied by the host before a game starts.
///
/// ## Example
///
/// ```
/// use connect_four::core::{Player, PlayerId};
///
/// let red = Player::new(PlayerId::ONE, "red");
/// assert_eq!(red.id, PlayerId::ONE);
/// assert_eq!(red.label, "red");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Seat identifier.
    pub id: PlayerId,

    /// Display metadata (color name, CSS value, nickname). Not interpreted.
    pub label: String,
}

impl Player {
    /// Create a new player.
    pub fn new(id: PlayerId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    /// Player one with the given label.
    pub fn first(label: impl Into<String>) -> Self {
        Self::new(PlayerId::ONE, label)
    }

    /// Player two with the given label.
    pub fn second(label: impl Into<String>) -> Self {
        Self::new(PlayerId::TWO, label)
    }
}

//! Board cells

use serde::{Deserialize, Serialize};

use super::Player;

/// Contents of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by a player.
    Taken(Player),
}

impl Cell {
    /// Whether the cell already holds a mark.
    #[must_use]
    pub const fn is_taken(self) -> bool {
        matches!(self, Self::Taken(_))
    }

    /// The mark in the cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Taken(p) => Some(p),
        }
    }

    /// The character used for this cell in board encodings and rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '_',
            Self::Taken(Player::X) => 'X',
            Self::Taken(Player::O) => 'O',
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

//! Whole-position verdicts

use serde::{Deserialize, Serialize};

/// What a board position means, as one of five mutually exclusive
/// classifications. Always computed fresh from the board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// X owns a completed line.
    XWins,
    /// O owns a completed line.
    OWins,
    /// Every cell is taken and neither side completed a line.
    Draw,
    /// A legal position with moves still to play.
    Unfinished,
    /// A position unreachable under strictly alternating play: both
    /// sides own a line, or the mark counts differ by two or more.
    Impossible,
}

impl GameOutcome {
    /// Whether this outcome ends an interactive game.
    ///
    /// [`GameOutcome::Impossible`] is not terminal: alternating play
    /// can never produce it, so only externally built boards classify
    /// that way.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::XWins | Self::OWins | Self::Draw)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::XWins => write!(f, "X wins"),
            Self::OWins => write!(f, "O wins"),
            Self::Draw => write!(f, "Draw"),
            Self::Unfinished => write!(f, "Game not finished"),
            Self::Impossible => write!(f, "Impossible"),
        }
    }
}

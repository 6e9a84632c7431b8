//! Whole-position classification
//!
//! Reduces a board to one [`GameOutcome`]. The rules are ordered:
//! impossibility trumps any other reading, and a packed board with no
//! line must come out a draw rather than fall through to a winner
//! check. The function is total over all decodable boards, reachable
//! through play or not.

use crate::core::models::{Board, GameOutcome, Player};
use crate::core::services::win::has_won;

/// Classify a position.
///
/// Evaluation order mirrors rule precedence:
///
/// 1. Both sides own a line, or the mark counts differ by two or more
///    (unreachable under alternating play) - [`GameOutcome::Impossible`].
/// 2. No line on either side and no empty cell - [`GameOutcome::Draw`].
/// 3. X owns a line - [`GameOutcome::XWins`].
/// 4. O owns a line - [`GameOutcome::OWins`].
/// 5. Otherwise the game continues - [`GameOutcome::Unfinished`].
#[must_use]
pub fn classify(board: &Board) -> GameOutcome {
    let count_x = board.count_of(Player::X);
    let count_o = board.count_of(Player::O);
    let x_won = has_won(board, Player::X);
    let o_won = has_won(board, Player::O);

    if (x_won && o_won) || count_x.abs_diff(count_o) >= 2 {
        GameOutcome::Impossible
    } else if !x_won && !o_won && board.empty_count() == 0 {
        GameOutcome::Draw
    } else if x_won {
        GameOutcome::XWins
    } else if o_won {
        GameOutcome::OWins
    } else {
        GameOutcome::Unfinished
    }
}

//! Winning-line detection
//!
//! A win is three cells of one mark along a row, a column, or one of
//! the two diagonals. The eight candidate lines are fixed for a 3×3
//! board, so the scan is a constant table with direct cell equality -
//! the only diagonal starts that can keep three `(+1, +1)` or `(+1, -1)`
//! steps in bounds are the two true corner anchors, so enumerating both
//! diagonals directly covers everything a full-grid walk would.

use crate::core::models::{Board, Cell, Player};

/// The eight three-cell lines: rows top to bottom, columns left to
/// right, then the descending and ascending diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Whether `player` owns all three cells of any line.
///
/// Short-circuits on the first completed line; every line is a
/// candidate until one hits, so no genuine win elsewhere on the board
/// is ever skipped.
#[must_use]
pub fn has_won(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.get(row, col) == Cell::Taken(player)))
}

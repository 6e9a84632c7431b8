//! Interactive game session
//!
//! Owns the board and the turn order for one game. Each pass of the
//! loop prompts for coordinates, applies the move if it is legal, and
//! re-prompts otherwise; the loop ends on the first win or draw. A
//! rejected line never changes the board or the turn, and there is no
//! limit on retries.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use tictactoe::core::models::{Board, Player};
use tictactoe::core::services::classify;
use tictactoe::output::render_board;

/// Why a submitted line did not become a move. Each variant renders as
/// the exact message the player sees before being re-prompted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The line did not hold exactly two integers
    #[error("You should enter numbers!")]
    NotNumbers,

    /// A coordinate fell outside the board
    #[error("Coordinates should be from 1 to 3!")]
    OutOfRange,

    /// The addressed cell already holds a mark
    #[error("This cell is occupied! Choose another one!")]
    Occupied,
}

/// One interactive game, from an empty board to a win or draw.
#[derive(Debug)]
pub struct Session {
    board: Board,
    current: Player,
}

impl Session {
    /// Creates a session with an empty board; X moves first.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::X,
        }
    }

    /// Play until a terminal outcome, prompting on `output` and reading
    /// one coordinate line per prompt from `input`.
    ///
    /// The only error path is the console itself: a game cannot fail,
    /// but input ending before the game does surfaces as
    /// [`io::ErrorKind::UnexpectedEof`].
    pub fn play<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> io::Result<()> {
        loop {
            write!(output, "Enter the coordinates: ")?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed before the game finished",
                ));
            }

            if let Err(rejection) = self.try_move(&line) {
                writeln!(output, "{rejection}")?;
                continue;
            }

            write!(output, "{}", render_board(&self.board))?;

            let outcome = classify(&self.board);
            debug!("position {} classified as {outcome}", self.board);
            if outcome.is_terminal() {
                writeln!(output, "{outcome}")?;
                return Ok(());
            }
        }
    }

    /// Parse one input line and apply it as the current player's move.
    /// On rejection the board and the turn are untouched.
    fn try_move(&mut self, line: &str) -> Result<(), MoveError> {
        let (row, col) = parse_coordinates(line)?;
        let (Some(row), Some(col)) = (to_index(row), to_index(col)) else {
            return Err(MoveError::OutOfRange);
        };
        if self.board.get(row, col).is_taken() {
            return Err(MoveError::Occupied);
        }

        self.board.set(row, col, self.current);
        debug!("{} takes ({}, {})", self.current, row + 1, col + 1);
        self.current = self.current.opponent();
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse exactly two whitespace-separated integers. Anything else -
/// foreign tokens, too few, too many - is one recoverable failure
/// class, since the player is re-prompted either way.
fn parse_coordinates(line: &str) -> Result<(i64, i64), MoveError> {
    let mut tokens = line.split_whitespace();
    let row = tokens.next().and_then(|t| t.parse().ok());
    let col = tokens.next().and_then(|t| t.parse().ok());
    match (row, col, tokens.next()) {
        (Some(row), Some(col), None) => Ok((row, col)),
        _ => Err(MoveError::NotNumbers),
    }
}

/// Map a 1-based coordinate to a 0-based board index, or `None` when it
/// is off the board (including zero and negatives).
fn to_index(coordinate: i64) -> Option<usize> {
    usize::try_from(coordinate - 1).ok().filter(|&i| i < Board::SIZE)
}

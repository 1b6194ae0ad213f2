use thiserror::Error;

use crate::coord::Square;
use crate::piece::Color;

/// Malformed algebraic square notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("expected two characters, got {0}")]
    WrongLength(usize),
    #[error("invalid file '{0}', expected A-H")]
    InvalidFile(char),
    #[error("invalid rank '{0}', expected 1-8")]
    InvalidRank(char),
}

/// A side has no king on the board.
///
/// Every position the engine produces keeps one king per side, so this only
/// shows up for hand-built grids and is never treated as "not in check".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no {0} king on the board")]
pub struct KingNotFound(pub Color);

/// Why `Board::apply_move` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptyOrigin(Square),
    #[error("the piece on {square} belongs to {owner}")]
    WrongOwner { square: Square, owner: Color },
    #[error("{from} to {to} is not a move for that piece")]
    IllegalTarget { from: Square, to: Square },
    #[error("{from} to {to} would leave the king in check")]
    LeavesKingInCheck { from: Square, to: Square },
    #[error("invariant violated: no {0} king on the board")]
    MissingKing(Color),
}

impl MoveError {
    /// True for the ordinary refusals a caller is expected to handle; false
    /// for invariant violations.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, MoveError::MissingKing(_))
    }
}

impl From<KingNotFound> for MoveError {
    fn from(err: KingNotFound) -> Self {
        MoveError::MissingKing(err.0)
    }
}

/// Failure of a move given in notation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Move(#[from] MoveError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error(transparent)]
    KingNotFound(#[from] KingNotFound),
}

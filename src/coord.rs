//! Algebraic square notation and the `(row, col)` indices behind it.
//!
//! Row 0 is rank 8 and row 7 is rank 1, so the board reads top to bottom the
//! way it is printed. Column 0 is the A file.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// The square `dr` rows and `dc` columns away, if it is on the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, row by row from A8 to H1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square { row, col }))
    }

    /// Light squares have an even `row + col`; A8 and H1 are light.
    pub fn is_light(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

/// Parses a two-character square such as `"E2"` or `"e2"`.
pub fn to_index(notation: &str) -> Result<Square, ParseError> {
    let chars: Vec<char> = notation.chars().collect();
    let (file, rank) = match chars.as_slice() {
        [file, rank] => (*file, *rank),
        _ => return Err(ParseError::WrongLength(chars.len())),
    };

    let col = match file.to_ascii_uppercase() {
        f @ 'A'..='H' => f as u8 - b'A',
        _ => return Err(ParseError::InvalidFile(file)),
    };
    let row = match rank {
        '1'..='8' => 8 - (rank as u8 - b'0'),
        _ => return Err(ParseError::InvalidRank(rank)),
    };

    Ok(Square { row, col })
}

/// Formats a square as uppercase file letter plus rank digit.
pub fn to_notation(square: Square) -> String {
    let file = (b'A' + square.col) as char;
    let rank = (b'8' - square.row) as char;
    format!("{}{}", file, rank)
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_index(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&to_notation(*self))
    }
}

use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use tracing::{debug, trace};

use crate::coord::{self, Square};
use crate::error::{MoveError, PlayError};
use crate::movegen::{candidate_destinations, piece_at};
use crate::piece::{Color, Piece, PieceKind};
use crate::validation::is_in_check;

/// 8x8 mailbox, indexed `[row][col]`; row 0 is rank 8.
pub type Grid = [[Piece; 8]; 8];

pub fn empty_grid() -> Grid {
    [[Piece::Empty; 8]; 8]
}

/// The standard opening position: black on rows 0-1, white on rows 6-7.
pub fn starting_grid() -> Grid {
    use Piece::*;

    let mut grid = empty_grid();
    grid[0] = [
        BlackRook, BlackKnight, BlackBishop, BlackQueen,
        BlackKing, BlackBishop, BlackKnight, BlackRook,
    ];
    grid[1] = [BlackPawn; 8];
    grid[6] = [WhitePawn; 8];
    grid[7] = [
        WhiteRook, WhiteKnight, WhiteBishop, WhiteQueen,
        WhiteKing, WhiteBishop, WhiteKnight, WhiteRook,
    ];
    grid
}

/// One committed move, kept while history tracking is on.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveRecord {
    pub number: u32,
    pub from: Square,
    pub to: Square,
    pub player: Color,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    side_to_move: Color,
    move_count: u32,
    fifty_move_counter: u32,
    // Keyed by `position_key`; counts positions reached by `apply_move`.
    repetitions: HashMap<String, u32>,
    history: Vec<MoveRecord>,
    history_enabled: bool,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(true)
    }
}

impl Board {
    /// A board set up in the opening position.
    pub fn new(history_enabled: bool) -> Self {
        let mut board = Board::from_grid(empty_grid(), Color::White, history_enabled);
        board.initialize();
        board
    }

    /// A board holding an arbitrary position with fresh counters and an
    /// empty repetition table.
    pub fn from_grid(grid: Grid, side_to_move: Color, history_enabled: bool) -> Self {
        Self {
            grid,
            side_to_move,
            move_count: 0,
            fifty_move_counter: 0,
            repetitions: HashMap::new(),
            history: Vec::new(),
            history_enabled,
        }
    }

    /// Resets to the opening position with white to move and all counters,
    /// the repetition table and the move log cleared.
    pub fn initialize(&mut self) {
        self.grid = starting_grid();
        self.side_to_move = Color::White;
        self.move_count = 0;
        self.fifty_move_counter = 0;
        self.repetitions.clear();
        self.history.clear();
    }

    /// Plays `from` to `to` for the side to move.
    ///
    /// On any error the board is left exactly as it was.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let result = self.try_apply(from, to);
        if let Err(err) = &result {
            debug!(%from, %to, side = %self.side_to_move, %err, "move rejected");
        }
        result
    }

    /// `apply_move` for squares given in algebraic notation.
    pub fn apply_notation(&mut self, from: &str, to: &str) -> Result<(), PlayError> {
        let from = coord::to_index(from)?;
        let to = coord::to_index(to)?;
        self.apply_move(from, to)?;
        Ok(())
    }

    fn try_apply(&mut self, from: Square, to: Square) -> Result<(), MoveError> {
        let moving_piece = piece_at(&self.grid, from);
        let Some(owner) = moving_piece.color() else {
            return Err(MoveError::EmptyOrigin(from));
        };
        if owner != self.side_to_move {
            return Err(MoveError::WrongOwner { square: from, owner });
        }
        if !candidate_destinations(from, &self.grid).contains(&to) {
            return Err(MoveError::IllegalTarget { from, to });
        }

        let after = simulate(&self.grid, from, to);
        if is_in_check(&after, self.side_to_move)? {
            return Err(MoveError::LeavesKingInCheck { from, to });
        }

        let captured = piece_at(&self.grid, to);
        self.grid = after;

        if moving_piece.kind() == Some(PieceKind::Pawn) || !captured.is_empty() {
            self.fifty_move_counter = 0;
        } else {
            self.fifty_move_counter += 1;
        }

        self.move_count += 1;
        if self.history_enabled {
            self.history.push(MoveRecord {
                number: self.move_count,
                from,
                to,
                player: self.side_to_move,
                timestamp: Utc::now(),
            });
        }

        self.side_to_move = self.side_to_move.opposite();

        let key = self.position_key();
        let count = self.repetitions.entry(key).or_insert(0);
        *count += 1;
        trace!(%from, %to, repetitions = *count, "move applied");

        Ok(())
    }

    pub fn get_piece(&self, square: Square) -> Piece {
        piece_at(&self.grid, square)
    }

    pub fn get_grid(&self) -> &Grid {
        &self.grid
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Plies since the last pawn move or capture.
    pub fn fifty_move_counter(&self) -> u32 {
        self.fifty_move_counter
    }

    /// How many times the current position has been reached by a move.
    pub fn repetition_count(&self) -> u32 {
        self.repetitions
            .get(&self.position_key())
            .copied()
            .unwrap_or(0)
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    /// Canonical encoding of the position: one symbol per square in row-major
    /// order followed by `w` or `b` for the side to move. Castling and en
    /// passant are not part of it.
    pub fn position_key(&self) -> String {
        let mut key: String = self.grid.iter().flatten().map(|p| p.symbol()).collect();
        key.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });
        key
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn history_enabled(&self) -> bool {
        self.history_enabled
    }

    /// Turning history off drops the log and its allocation.
    pub fn set_history_enabled(&mut self, enable: bool) {
        self.history_enabled = enable;
        if !enable {
            self.history = Vec::new();
        }
    }
}

/// The grid after moving whatever stands on `from` to `to`.
pub(crate) fn simulate(grid: &Grid, from: Square, to: Square) -> Grid {
    let mut after = *grid;
    after[to.row() as usize][to.col() as usize] = piece_at(grid, from);
    after[from.row() as usize][from.col() as usize] = Piece::Empty;
    after
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "    A B C D E F G H")?;
        for (row, pieces) in self.grid.iter().enumerate() {
            let rank = 8 - row;
            write!(f, "{}  ", rank)?;
            for piece in pieces {
                write!(f, " {}", piece.symbol())?;
            }
            writeln!(f, "   {}", rank)?;
        }
        writeln!(f, "    A B C D E F G H")?;
        let turn = match self.side_to_move {
            Color::White => "White",
            Color::Black => "Black",
        };
        write!(f, "Turn: {}, Move count: {}", turn, self.move_count)
    }
}

//! Check, mate, stalemate and draw detection.
//!
//! Terminal-condition checks work by simulating each candidate move on a
//! copy of the grid and asking whether the mover is still in check. The real
//! board is never touched.

use crate::board::{simulate, Board, Grid};
use crate::coord::Square;
use crate::error::KingNotFound;
use crate::movegen::{candidate_destinations, piece_at, pseudo_legal_moves};
use crate::piece::{Color, Piece, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate(Color), // Color is the winner
    Stalemate,
    FiftyMoveRule,
    ThreefoldRepetition,
    InsufficientMaterial,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        *self != GameStatus::Ongoing
    }
}

pub fn king_square(grid: &Grid, player: Color) -> Result<Square, KingNotFound> {
    let king = Piece::new(PieceKind::King, player);
    Square::all()
        .find(|&square| piece_at(grid, square) == king)
        .ok_or(KingNotFound(player))
}

/// Whether any opposing piece has `player`'s king among its destinations.
pub fn is_in_check(grid: &Grid, player: Color) -> Result<bool, KingNotFound> {
    let king = king_square(grid, player)?;
    let opponent = player.opposite();

    Ok(Square::all()
        .filter(|&square| piece_at(grid, square).color() == Some(opponent))
        .any(|square| candidate_destinations(square, grid).contains(&king)))
}

/// Pseudo-legal moves of `player` that do not leave their own king in
/// check, in generator order.
pub fn legal_moves(board: &Board, player: Color) -> Result<Vec<(Square, Square)>, KingNotFound> {
    let grid = board.get_grid();
    king_square(grid, player)?;
    let mut moves = Vec::new();
    for (from, to) in pseudo_legal_moves(grid, player) {
        if !is_in_check(&simulate(grid, from, to), player)? {
            moves.push((from, to));
        }
    }
    Ok(moves)
}

fn has_escape(board: &Board, player: Color) -> Result<bool, KingNotFound> {
    let grid = board.get_grid();
    for (from, to) in pseudo_legal_moves(grid, player) {
        if !is_in_check(&simulate(grid, from, to), player)? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn is_checkmate(board: &Board, player: Color) -> Result<bool, KingNotFound> {
    if !is_in_check(board.get_grid(), player)? {
        return Ok(false);
    }
    Ok(!has_escape(board, player)?)
}

pub fn is_stalemate(board: &Board, player: Color) -> Result<bool, KingNotFound> {
    if is_in_check(board.get_grid(), player)? {
        return Ok(false);
    }
    Ok(!has_escape(board, player)?)
}

#[derive(Debug, Default)]
struct Material {
    knights: u8,
    light_bishops: u8,
    dark_bishops: u8,
}

impl Material {
    fn minors(&self) -> u8 {
        self.knights + self.light_bishops + self.dark_bishops
    }
}

/// Draw by lack of mating material, using a deliberately narrow rule set:
/// bare kings, king and one minor piece against a bare king, or king and
/// bishop against king and bishop with both bishops on the same square
/// color. Any pawn, rook or queen means there is enough material.
pub fn is_insufficient_material(board: &Board) -> bool {
    let grid = board.get_grid();
    let mut white = Material::default();
    let mut black = Material::default();

    for square in Square::all() {
        let piece = piece_at(grid, square);
        let (Some(kind), Some(color)) = (piece.kind(), piece.color()) else {
            continue;
        };
        let side = match color {
            Color::White => &mut white,
            Color::Black => &mut black,
        };
        match kind {
            PieceKind::King => {}
            PieceKind::Knight => side.knights += 1,
            PieceKind::Bishop if square.is_light() => side.light_bishops += 1,
            PieceKind::Bishop => side.dark_bishops += 1,
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
        }
    }

    match (white.minors(), black.minors()) {
        (0, 0) => true,
        (1, 0) | (0, 1) => true,
        (1, 1) => {
            (white.light_bishops == 1 && black.light_bishops == 1)
                || (white.dark_bishops == 1 && black.dark_bishops == 1)
        }
        _ => false,
    }
}

/// King on its home square, rook in the chosen corner, nothing between them
/// and the king not in check.
///
/// Whether either piece has moved before, and whether the king crosses an
/// attacked square, is not tracked.
pub fn can_castle(board: &Board, player: Color, kingside: bool) -> Result<bool, KingNotFound> {
    let row = match player {
        Color::White => 7,
        Color::Black => 0,
    };
    let king_col = 4u8;
    let rook_col = if kingside { 7u8 } else { 0u8 };

    let at = |col: u8| {
        Square::new(row, col)
            .map(|square| board.get_piece(square))
            .unwrap_or_default()
    };

    if !at(king_col).is(PieceKind::King, player) || !at(rook_col).is(PieceKind::Rook, player) {
        return Ok(false);
    }

    let between = if kingside {
        king_col + 1..rook_col
    } else {
        rook_col + 1..king_col
    };
    if between.into_iter().any(|col| !at(col).is_empty()) {
        return Ok(false);
    }

    Ok(!is_in_check(board.get_grid(), player)?)
}

/// A pawn standing on its last rank: rank 8 for white, rank 1 for black.
pub fn is_promotion(board: &Board, square: Square) -> bool {
    match board.get_piece(square) {
        Piece::WhitePawn => square.row() == 0,
        Piece::BlackPawn => square.row() == 7,
        _ => false,
    }
}

/// The outcome of the position for the side to move, checking conditions
/// in order: mate, stalemate, fifty-move rule, repetition, material.
pub fn game_status(board: &Board) -> Result<GameStatus, KingNotFound> {
    let player = board.side_to_move();

    if is_checkmate(board, player)? {
        return Ok(GameStatus::Checkmate(player.opposite()));
    }
    if is_stalemate(board, player)? {
        return Ok(GameStatus::Stalemate);
    }
    if board.fifty_move_counter() >= 50 {
        return Ok(GameStatus::FiftyMoveRule);
    }
    if board.is_threefold_repetition() {
        return Ok(GameStatus::ThreefoldRepetition);
    }
    if is_insufficient_material(board) {
        return Ok(GameStatus::InsufficientMaterial);
    }
    Ok(GameStatus::Ongoing)
}

//! Pseudo-legal move generation on the mailbox grid.
//!
//! Destinations respect piece geometry and same-color blocking only. Whether
//! a move leaves the mover's king in check is decided by the board and the
//! validation module, which simulate the move on a copy of the grid.

use crate::board::Grid;
use crate::coord::Square;
use crate::piece::{Color, Piece, PieceKind};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1), (2, -1), (-2, 1), (-2, -1),
    (1, 2), (1, -2), (-1, 2), (-1, -2),
];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (-1, -1), (1, -1), (-1, 1),
];

#[inline]
pub fn piece_at(grid: &Grid, square: Square) -> Piece {
    grid[square.row() as usize][square.col() as usize]
}

/// Every square the piece on `square` could move to, ignoring checks.
///
/// The order is fixed for a given grid: callers enumerate these exhaustively
/// and tests compare exact sequences.
pub fn candidate_destinations(square: Square, grid: &Grid) -> Vec<Square> {
    let piece = piece_at(grid, square);
    let (Some(kind), Some(color)) = (piece.kind(), piece.color()) else {
        return Vec::new();
    };

    match kind {
        PieceKind::Pawn => pawn_moves(square, grid, color),
        PieceKind::Knight => step_moves(square, grid, &KNIGHT_OFFSETS),
        PieceKind::Bishop => slide_moves(square, grid, &BISHOP_DIRECTIONS),
        PieceKind::Rook => slide_moves(square, grid, &ROOK_DIRECTIONS),
        PieceKind::Queen => {
            let mut moves = slide_moves(square, grid, &ROOK_DIRECTIONS);
            moves.extend(slide_moves(square, grid, &BISHOP_DIRECTIONS));
            moves
        }
        PieceKind::King => step_moves(square, grid, &KING_OFFSETS),
    }
}

/// All `(from, to)` pairs for every piece of `color`, origins in row-major
/// order.
pub fn pseudo_legal_moves(grid: &Grid, color: Color) -> Vec<(Square, Square)> {
    Square::all()
        .filter(|&from| piece_at(grid, from).color() == Some(color))
        .flat_map(|from| {
            candidate_destinations(from, grid)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Row delta of one pawn step. White starts on rank 2 (row 6) and walks
/// towards row 0.
fn pawn_direction(color: Color) -> i8 {
    -color.sign()
}

fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

fn pawn_moves(square: Square, grid: &Grid, color: Color) -> Vec<Square> {
    let mut moves = Vec::new();
    let pawn = piece_at(grid, square);
    let dir = pawn_direction(color);

    // Pushes
    if let Some(one) = square.offset(dir, 0) {
        if piece_at(grid, one).is_empty() {
            moves.push(one);
            if square.row() == pawn_start_row(color) {
                if let Some(two) = square.offset(2 * dir, 0) {
                    if piece_at(grid, two).is_empty() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // Captures
    for dc in [-1, 1] {
        if let Some(target) = square.offset(dir, dc) {
            if piece_at(grid, target).is_enemy_of(pawn) {
                moves.push(target);
            }
        }
    }

    moves
}

fn step_moves(square: Square, grid: &Grid, offsets: &[(i8, i8)]) -> Vec<Square> {
    let mover = piece_at(grid, square);
    offsets
        .iter()
        .filter_map(|&(dr, dc)| square.offset(dr, dc))
        .filter(|&target| {
            let occupant = piece_at(grid, target);
            occupant.is_empty() || occupant.is_enemy_of(mover)
        })
        .collect()
}

fn slide_moves(square: Square, grid: &Grid, directions: &[(i8, i8)]) -> Vec<Square> {
    let mut moves = Vec::new();
    let mover = piece_at(grid, square);

    for &(dr, dc) in directions {
        let mut current = square.offset(dr, dc);
        while let Some(target) = current {
            let occupant = piece_at(grid, target);
            if occupant.is_empty() {
                moves.push(target);
            } else {
                if occupant.is_enemy_of(mover) {
                    moves.push(target);
                }
                break;
            }
            current = target.offset(dr, dc);
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{empty_grid, starting_grid};

    fn sq(notation: &str) -> Square {
        notation.parse().expect("valid square")
    }

    fn squares(list: &[&str]) -> Vec<Square> {
        list.iter().map(|n| sq(n)).collect()
    }

    fn grid_with(pieces: &[(&str, Piece)]) -> Grid {
        let mut grid = empty_grid();
        for &(at, piece) in pieces {
            let s = sq(at);
            grid[s.row() as usize][s.col() as usize] = piece;
        }
        grid
    }

    #[test]
    fn starting_position_has_twenty_white_moves() {
        let grid = starting_grid();
        let moves = pseudo_legal_moves(&grid, Color::White);
        assert_eq!(moves.len(), 20);

        let pawn_moves = moves
            .iter()
            .filter(|(from, _)| piece_at(&grid, *from) == Piece::WhitePawn)
            .count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(pseudo_legal_moves(&grid, Color::Black).len(), 20);
    }

    #[test]
    fn starting_position_order_is_stable() {
        let grid = starting_grid();
        assert_eq!(candidate_destinations(sq("E2"), &grid), squares(&["E3", "E4"]));
        assert_eq!(candidate_destinations(sq("B1"), &grid), squares(&["C3", "A3"]));
        assert_eq!(candidate_destinations(sq("G8"), &grid), squares(&["H6", "F6"]));
        assert!(candidate_destinations(sq("A1"), &grid).is_empty());
        assert!(candidate_destinations(sq("E4"), &grid).is_empty());

        let origins: Vec<String> = pseudo_legal_moves(&grid, Color::White)
            .iter()
            .map(|(from, to)| format!("{}{}", from, to))
            .collect();
        assert_eq!(
            origins,
            vec![
                "A2A3", "A2A4", "B2B3", "B2B4", "C2C3", "C2C4", "D2D3", "D2D4",
                "E2E3", "E2E4", "F2F3", "F2F4", "G2G3", "G2G4", "H2H3", "H2H4",
                "B1C3", "B1A3", "G1H3", "G1F3",
            ]
        );
    }

    #[test]
    fn pawn_double_push_needs_both_squares_empty() {
        let grid = grid_with(&[("E2", Piece::WhitePawn), ("E4", Piece::BlackKnight)]);
        assert_eq!(candidate_destinations(sq("E2"), &grid), squares(&["E3"]));

        let grid = grid_with(&[("E2", Piece::WhitePawn), ("E3", Piece::BlackKnight)]);
        assert!(candidate_destinations(sq("E2"), &grid).is_empty());

        let grid = grid_with(&[("E3", Piece::WhitePawn)]);
        assert_eq!(candidate_destinations(sq("E3"), &grid), squares(&["E4"]));
    }

    #[test]
    fn pawns_capture_diagonally_forward_only() {
        let grid = grid_with(&[
            ("D4", Piece::WhitePawn),
            ("C5", Piece::BlackPawn),
            ("E5", Piece::WhiteKnight),
            ("C3", Piece::BlackRook),
        ]);
        assert_eq!(candidate_destinations(sq("D4"), &grid), squares(&["D5", "C5"]));

        let grid = grid_with(&[("D5", Piece::BlackPawn), ("E4", Piece::WhiteBishop)]);
        assert_eq!(candidate_destinations(sq("D5"), &grid), squares(&["D4", "E4"]));
    }

    #[test]
    fn pawn_on_last_rank_has_no_push() {
        let grid = grid_with(&[("A8", Piece::WhitePawn)]);
        assert!(candidate_destinations(sq("A8"), &grid).is_empty());
    }

    #[test]
    fn knight_in_the_corner() {
        let grid = grid_with(&[("A1", Piece::WhiteKnight), ("C2", Piece::WhitePawn)]);
        assert_eq!(candidate_destinations(sq("A1"), &grid), squares(&["B3"]));

        let grid = grid_with(&[("D4", Piece::BlackKnight)]);
        assert_eq!(candidate_destinations(sq("D4"), &grid).len(), 8);
    }

    #[test]
    fn sliders_stop_at_blockers() {
        let grid = grid_with(&[
            ("A1", Piece::WhiteRook),
            ("A4", Piece::BlackPawn),
            ("C1", Piece::WhiteKing),
        ]);
        assert_eq!(
            candidate_destinations(sq("A1"), &grid),
            squares(&["A2", "A3", "A4", "B1"])
        );

        let grid = grid_with(&[("C1", Piece::BlackBishop), ("E3", Piece::BlackPawn)]);
        assert_eq!(
            candidate_destinations(sq("C1"), &grid),
            squares(&["D2", "B2", "A3"])
        );
    }

    #[test]
    fn queen_is_rook_then_bishop() {
        let grid = grid_with(&[("D4", Piece::WhiteQueen)]);
        let queen = candidate_destinations(sq("D4"), &grid);
        assert_eq!(queen.len(), 27);

        let rook_grid = grid_with(&[("D4", Piece::WhiteRook)]);
        let bishop_grid = grid_with(&[("D4", Piece::WhiteBishop)]);
        let mut expected = candidate_destinations(sq("D4"), &rook_grid);
        expected.extend(candidate_destinations(sq("D4"), &bishop_grid));
        assert_eq!(queen, expected);
    }

    #[test]
    fn king_steps_and_avoids_own_pieces() {
        let grid = grid_with(&[
            ("E1", Piece::WhiteKing),
            ("D1", Piece::WhiteQueen),
            ("E2", Piece::BlackPawn),
        ]);
        assert_eq!(
            candidate_destinations(sq("E1"), &grid),
            squares(&["E2", "F1", "D2", "F2"])
        );
    }

    #[test]
    fn empty_square_has_no_moves() {
        assert!(candidate_destinations(sq("D4"), &empty_grid()).is_empty());
    }
}

//! The boundary to whatever picks moves.
//!
//! The engine only fixes the interface: a selector sees the board and the
//! player to move and answers with an origin and destination. Anything it
//! returns is still checked by `Board::apply_move`.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::trace;

use crate::board::Board;
use crate::coord::Square;
use crate::error::SelectError;
use crate::piece::Color;
use crate::validation::legal_moves;

pub trait MoveSelector {
    /// `Ok(None)` when `player` has no legal move.
    fn select(&mut self, board: &Board, player: Color) -> Result<Option<(Square, Square)>, SelectError>;
}

/// Picks uniformly among the legal moves.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence of picks for the same positions.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn select(&mut self, board: &Board, player: Color) -> Result<Option<(Square, Square)>, SelectError> {
        let moves = legal_moves(board, player)?;
        trace!(%player, candidates = moves.len(), "selecting move");
        Ok(moves.choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::empty_grid;
    use crate::error::KingNotFound;
    use crate::piece::Piece;

    #[test]
    fn picks_are_legal_moves() {
        let mut selector = RandomSelector::with_seed(7);
        let mut board = Board::new(false);
        for _ in 0..20 {
            let player = board.side_to_move();
            let Some((from, to)) = selector.select(&board, player).expect("kings present") else {
                break;
            };
            let legal = legal_moves(&board, player).expect("kings present");
            assert!(legal.contains(&(from, to)));
            board.apply_move(from, to).expect("selected move is legal");
        }
    }

    #[test]
    fn same_seed_same_game() {
        let play = |seed| {
            let mut selector = RandomSelector::with_seed(seed);
            let mut board = Board::new(false);
            for _ in 0..10 {
                if let Ok(Some((from, to))) = selector.select(&board, board.side_to_move()) {
                    board.apply_move(from, to).expect("selected move is legal");
                }
            }
            board.position_key()
        };
        assert_eq!(play(42), play(42));
    }

    #[test]
    fn no_legal_move_means_none() {
        // Stalemated black king on H8.
        let mut grid = empty_grid();
        grid[0][7] = Piece::BlackKing;
        grid[2][6] = Piece::WhiteQueen;
        grid[7][0] = Piece::WhiteKing;
        let board = Board::from_grid(grid, Color::Black, false);

        let mut selector = RandomSelector::with_seed(1);
        assert_eq!(selector.select(&board, Color::Black), Ok(None));
    }

    #[test]
    fn missing_king_is_an_error() {
        let board = Board::from_grid(empty_grid(), Color::White, false);
        let mut selector = RandomSelector::with_seed(1);
        assert_eq!(
            selector.select(&board, Color::White),
            Err(SelectError::KingNotFound(KingNotFound(Color::White)))
        );
    }
}

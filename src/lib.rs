pub mod board;
pub mod coord;
pub mod error;
pub mod movegen;
pub mod piece;
pub mod selector;
pub mod validation;

pub use board::{Board, Grid, MoveRecord};
pub use coord::{to_index, to_notation, Square};
pub use error::{KingNotFound, MoveError, ParseError, PlayError, SelectError};
pub use movegen::{candidate_destinations, pseudo_legal_moves};
pub use piece::{Color, Piece, PieceKind};
pub use selector::{MoveSelector, RandomSelector};
pub use validation::{
    can_castle, game_status, is_checkmate, is_in_check, is_insufficient_material, is_promotion,
    is_stalemate, king_square, legal_moves, GameStatus,
};

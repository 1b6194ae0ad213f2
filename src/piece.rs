use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// +1 for white, -1 for black; the sign a piece code carries.
    pub fn sign(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Contents of a square. The discriminant is the signed code: zero for an
/// empty square, positive for white, negative for black, magnitude for the
/// kind (1 pawn through 6 king).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i8)]
pub enum Piece {
    #[default]
    Empty = 0,
    WhitePawn = 1,
    WhiteKnight = 2,
    WhiteBishop = 3,
    WhiteRook = 4,
    WhiteQueen = 5,
    WhiteKing = 6,
    BlackPawn = -1,
    BlackKnight = -2,
    BlackBishop = -3,
    BlackRook = -4,
    BlackQueen = -5,
    BlackKing = -6,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        match (kind, color) {
            (PieceKind::Pawn, Color::White) => Piece::WhitePawn,
            (PieceKind::Knight, Color::White) => Piece::WhiteKnight,
            (PieceKind::Bishop, Color::White) => Piece::WhiteBishop,
            (PieceKind::Rook, Color::White) => Piece::WhiteRook,
            (PieceKind::Queen, Color::White) => Piece::WhiteQueen,
            (PieceKind::King, Color::White) => Piece::WhiteKing,
            (PieceKind::Pawn, Color::Black) => Piece::BlackPawn,
            (PieceKind::Knight, Color::Black) => Piece::BlackKnight,
            (PieceKind::Bishop, Color::Black) => Piece::BlackBishop,
            (PieceKind::Rook, Color::Black) => Piece::BlackRook,
            (PieceKind::Queen, Color::Black) => Piece::BlackQueen,
            (PieceKind::King, Color::Black) => Piece::BlackKing,
        }
    }

    pub fn code(self) -> i8 {
        self as i8
    }

    pub fn from_code(code: i8) -> Option<Self> {
        let piece = match code {
            0 => Piece::Empty,
            1 => Piece::WhitePawn,
            2 => Piece::WhiteKnight,
            3 => Piece::WhiteBishop,
            4 => Piece::WhiteRook,
            5 => Piece::WhiteQueen,
            6 => Piece::WhiteKing,
            -1 => Piece::BlackPawn,
            -2 => Piece::BlackKnight,
            -3 => Piece::BlackBishop,
            -4 => Piece::BlackRook,
            -5 => Piece::BlackQueen,
            -6 => Piece::BlackKing,
            _ => return None,
        };
        Some(piece)
    }

    pub fn is_empty(self) -> bool {
        self == Piece::Empty
    }

    pub fn color(self) -> Option<Color> {
        match self.code() {
            0 => None,
            c if c > 0 => Some(Color::White),
            _ => Some(Color::Black),
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        match self.code().abs() {
            1 => Some(PieceKind::Pawn),
            2 => Some(PieceKind::Knight),
            3 => Some(PieceKind::Bishop),
            4 => Some(PieceKind::Rook),
            5 => Some(PieceKind::Queen),
            6 => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self == Piece::new(kind, color)
    }

    /// True when both squares hold pieces of opposite colors.
    pub fn is_enemy_of(self, other: Piece) -> bool {
        self.code() * other.code() < 0
    }

    /// Letter used by the board rendering and the position key: uppercase
    /// for white, lowercase for black, `.` for an empty square.
    pub fn symbol(self) -> char {
        let letter = match self.kind() {
            None => return '.',
            Some(PieceKind::Pawn) => 'p',
            Some(PieceKind::Knight) => 'n',
            Some(PieceKind::Bishop) => 'b',
            Some(PieceKind::Rook) => 'r',
            Some(PieceKind::Queen) => 'q',
            Some(PieceKind::King) => 'k',
        };
        if self.color() == Some(Color::White) {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    King,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl Type {
    /// Promotion suffix used in coordinate notation (`e7e8q`)
    pub fn promotion_char(&self) -> Option<char> {
        match self {
            Type::Queen => Some('q'),
            Type::Rook => Some('r'),
            Type::Bishop => Some('b'),
            Type::Knight => Some('n'),
            Type::King | Type::Pawn => None,
        }
    }

    pub fn from_promotion_char(c: char) -> Option<Type> {
        match c {
            'q' => Some(Type::Queen),
            'r' => Some(Type::Rook),
            'b' => Some(Type::Bishop),
            'n' => Some(Type::Knight),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row delta of a pawn step. Row 0 is the 8th rank, so White walks toward 0.
    pub fn pawn_direction(&self) -> i32 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    pub fn pawn_start_row(&self) -> usize {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    pub fn promotion_row(&self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    /// Row holding this color's king and rooks at the start of the game
    pub fn back_row(&self) -> usize {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Parses a FEN piece letter; uppercase is White.
    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::King => 'k',
            Type::Queen => 'q',
            Type::Rook => 'r',
            Type::Bishop => 'b',
            Type::Knight => 'n',
            Type::Pawn => 'p',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }
}

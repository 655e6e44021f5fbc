use std::fmt;

use smallvec::SmallVec;

use super::piece::{Piece, Type};
use super::square::square_name;

/// Move buffer used by the generators. Spills to the heap past 64 moves.
pub type MoveList = SmallVec<[Move; 64]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Normal,
    EnPassant,
    Castling,
    PromotionQueen,
    PromotionRook,
    PromotionBishop,
    PromotionKnight,
}

impl MoveType {
    pub const PROMOTIONS: [MoveType; 4] = [
        MoveType::PromotionQueen,
        MoveType::PromotionRook,
        MoveType::PromotionBishop,
        MoveType::PromotionKnight,
    ];

    pub fn is_promotion(&self) -> bool {
        self.promotion_type().is_some()
    }

    /// Piece kind a promotion turns the pawn into
    pub fn promotion_type(&self) -> Option<Type> {
        match self {
            MoveType::PromotionQueen => Some(Type::Queen),
            MoveType::PromotionRook => Some(Type::Rook),
            MoveType::PromotionBishop => Some(Type::Bishop),
            MoveType::PromotionKnight => Some(Type::Knight),
            _ => None,
        }
    }
}

/// A single move. `captured` is what sits on the captured square when the move
/// is generated (for en passant, the pawn behind the destination).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: u8,
    to: u8,
    captured: Option<Piece>,
    move_type: MoveType,
}

impl Move {
    pub fn new(from: u8, to: u8, captured: Option<Piece>, move_type: MoveType) -> Move {
        Self { from, to, captured, move_type }
    }

    pub fn from(&self) -> usize {
        self.from as usize
    }

    pub fn to(&self) -> usize {
        self.to as usize
    }

    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    pub fn move_type(&self) -> MoveType {
        self.move_type
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.move_type.is_promotion()
    }

    pub fn promotion(&self) -> Option<Type> {
        self.move_type.promotion_type()
    }

    pub fn is_en_passant(&self) -> bool {
        self.move_type == MoveType::EnPassant
    }

    pub fn is_castling(&self) -> bool {
        self.move_type == MoveType::Castling
    }

    /// Coordinate notation: origin, destination, optional promotion letter.
    pub fn to_uci(&self) -> String {
        let mut text = format!("{}{}", square_name(self.from()), square_name(self.to()));
        if let Some(c) = self.promotion().and_then(|t| t.promotion_char()) {
            text.push(c);
        }
        text
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

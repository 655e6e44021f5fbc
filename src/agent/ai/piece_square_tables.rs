// Piece-square tables for positional evaluation
// All values in centipawns (100 = 1 pawn)
// Tables are written from White's perspective, rank 1 first.
// The board stores rank 8 first, so White squares are flipped with `^ 56`
// and Black squares index the table directly (its own rank 1 is row 0).

use crate::game_repr::{Color, Type};

// Pawn position values - encourage advancement and central control
pub const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 1 (pawns shouldn't be here)
     5, 10, 10,-20,-20, 10, 10,  5,  // Rank 2
     5, -5,-10,  0,  0,-10, -5,  5,  // Rank 3
     0,  0,  0, 20, 20,  0,  0,  0,  // Rank 4
     5,  5, 10, 25, 25, 10,  5,  5,  // Rank 5
    10, 10, 20, 30, 30, 20, 10, 10,  // Rank 6
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7 (near promotion)
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8 (pawns shouldn't be here)
];

// Knight position values - prefer center squares
pub const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

// Bishop position values - prefer center and long diagonals
pub const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

// Rook position values - prefer 7th rank and center files
pub const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  5,  5,  0,  0,  0,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     5, 10, 10, 10, 10, 10, 10,  5,  // 7th rank bonus
     0,  0,  0,  0,  0,  0,  0,  0,
];

// Queen position values - slight central preference
pub const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -10,  5,  5,  5,  5,  5,  0,-10,
      0,  0,  5,  5,  5,  5,  0, -5,
     -5,  0,  5,  5,  5,  5,  0, -5,
    -10,  0,  5,  5,  5,  5,  0,-10,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

// King middlegame - stay behind the pawn shield
pub const KING_MIDDLEGAME_TABLE: [i32; 64] = [
     20, 30, 10,  0,  0, 10, 30, 20,  // Rank 1 (castled position)
     20, 20,  0,  0,  0,  0, 20, 20,
    -10,-20,-20,-20,-20,-20,-20,-10,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
];

// King endgame - walk to the center
pub const KING_ENDGAME_TABLE: [i32; 64] = [
    -50,-30,-30,-30,-30,-30,-30,-50,
    -30,-30,  0,  0,  0,  0,-30,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 30, 40, 40, 30,-10,-30,
    -30,-10, 20, 30, 30, 20,-10,-30,
    -30,-20,-10,  0,  0,-10,-20,-30,
    -50,-40,-30,-20,-20,-30,-40,-50,
];

/// Positional bonus for a piece of `color` standing on board square `square`
pub fn get_pst_value(piece_type: Type, color: Color, square: usize, is_endgame: bool) -> i32 {
    let idx = match color {
        Color::White => square ^ 56,
        Color::Black => square,
    };

    match piece_type {
        Type::Pawn => PAWN_TABLE[idx],
        Type::Knight => KNIGHT_TABLE[idx],
        Type::Bishop => BISHOP_TABLE[idx],
        Type::Rook => ROOK_TABLE[idx],
        Type::Queen => QUEEN_TABLE[idx],
        Type::King if is_endgame => KING_ENDGAME_TABLE[idx],
        Type::King => KING_MIDDLEGAME_TABLE[idx],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::square::parse_square;

    fn sq(name: &str) -> usize {
        parse_square(name).unwrap()
    }

    #[test]
    fn test_pawn_prefers_advancement() {
        let rank2 = get_pst_value(Type::Pawn, Color::White, sq("d2"), false);
        let rank7 = get_pst_value(Type::Pawn, Color::White, sq("d7"), false);
        assert!(rank7 > rank2);
    }

    #[test]
    fn test_knight_prefers_center() {
        let center = get_pst_value(Type::Knight, Color::White, sq("d4"), false);
        let edge = get_pst_value(Type::Knight, Color::White, sq("a1"), false);
        assert!(center > edge);
    }

    #[test]
    fn test_king_safety_in_middlegame() {
        let castled = get_pst_value(Type::King, Color::White, sq("g1"), false);
        let center = get_pst_value(Type::King, Color::White, sq("d4"), false);
        assert!(castled > center);
        assert_eq!(castled, 30);
    }

    #[test]
    fn test_king_activity_in_endgame() {
        let castled = get_pst_value(Type::King, Color::White, sq("g1"), true);
        let center = get_pst_value(Type::King, Color::White, sq("d4"), true);
        assert!(center > castled);
    }

    #[test]
    fn test_black_pieces_mirrored() {
        for (white_sq, black_sq) in [("d2", "d7"), ("g1", "g8"), ("a7", "a2")] {
            for piece_type in [Type::Pawn, Type::Knight, Type::Rook, Type::King] {
                assert_eq!(
                    get_pst_value(piece_type, Color::White, sq(white_sq), false),
                    get_pst_value(piece_type, Color::Black, sq(black_sq), false),
                    "{piece_type:?} {white_sq}/{black_sq}"
                );
            }
        }
    }
}

// Position evaluation
// Scores are in centipawns and always from White's point of view:
// positive favours White, negative favours Black.

use crate::game_repr::{Color, Position, Type};
use super::piece_square_tables::get_pst_value;

// Material values in centipawns
pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 330;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 20_000;

// Phase values for game phase calculation (opening=256, endgame=0)
const KNIGHT_PHASE: i32 = 1;
const BISHOP_PHASE: i32 = 1;
const ROOK_PHASE: i32 = 2;
const QUEEN_PHASE: i32 = 4;
const TOTAL_PHASE: i32 = KNIGHT_PHASE * 4 + BISHOP_PHASE * 4 + ROOK_PHASE * 4 + QUEEN_PHASE * 2;

/// Static evaluation used at the leaves of the search.
///
/// Implementations must be pure: the same position always gets the same score.
pub trait Evaluator {
    fn evaluate(&self, pos: &Position) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&Position) -> i32,
{
    fn evaluate(&self, pos: &Position) -> i32 {
        self(pos)
    }
}

/// Material plus piece-square tables
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEvaluator;

impl Evaluator for MaterialEvaluator {
    fn evaluate(&self, pos: &Position) -> i32 {
        let is_endgame = calculate_game_phase(pos) < 128;

        let mut score = 0;
        for square in 0..64 {
            let Some(piece) = pos.piece_at(square) else {
                continue;
            };

            let value = piece_value(piece.piece_type)
                + get_pst_value(piece.piece_type, piece.color, square, is_endgame);

            match piece.color {
                Color::White => score += value,
                Color::Black => score -= value,
            }
        }
        score
    }
}

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => KING_VALUE,
    }
}

/// Calculate game phase based on remaining pieces
/// Returns value from 0 (endgame) to 256 (opening)
fn calculate_game_phase(pos: &Position) -> i32 {
    let phase: i32 = (0..64)
        .filter_map(|sq| pos.piece_at(sq))
        .map(|piece| match piece.piece_type {
            Type::Knight => KNIGHT_PHASE,
            Type::Bishop => BISHOP_PHASE,
            Type::Rook => ROOK_PHASE,
            Type::Queen => QUEEN_PHASE,
            Type::Pawn | Type::King => 0,
        })
        .sum();

    ((phase * 256 + TOTAL_PHASE / 2) / TOTAL_PHASE).clamp(0, 256)
}

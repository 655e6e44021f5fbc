// Move ordering for alpha-beta: good moves first means earlier cutoffs

use crate::game_repr::{square::file_of, Move, MoveList, Position, Type};
use super::evaluation::piece_value;

const CENTER_PAWN_BONUS: i32 = 20;
const PAWN_ADVANCE_BONUS: i32 = 15;
const CENTER_KNIGHT_BONUS: i32 = 10;
const CASTLING_BONUS: i32 = 50;

fn is_center_file(square: usize) -> bool {
    matches!(file_of(square), 3 | 4)
}

/// Heuristic score of a move in the current position (higher = search first)
///
/// Captures use MVV-LVA (victim value minus attacker value), promotions add
/// the value of the new piece, and a few quiet-move bonuses push central
/// pawn and knight moves and castling ahead of the rest.
pub fn score_move(pos: &Position, mv: Move) -> i32 {
    let Some(mover) = pos.piece_at(mv.from()) else {
        return 0;
    };

    let mut score = 0;

    if let Some(victim) = mv.captured() {
        score += piece_value(victim.piece_type) - piece_value(mover.piece_type);
    }

    if let Some(promoted) = mv.promotion() {
        score += piece_value(promoted);
    }

    match mover.piece_type {
        Type::Pawn => {
            if is_center_file(mv.to()) {
                score += CENTER_PAWN_BONUS;
            }
            // Pawns only ever move forward, captures included
            score += PAWN_ADVANCE_BONUS;
        }
        Type::Knight if is_center_file(mv.to()) => score += CENTER_KNIGHT_BONUS,
        _ => {}
    }

    if mv.is_castling() {
        score += CASTLING_BONUS;
    }

    score
}

/// All legal moves of the side to move, best-scored first.
/// Equal scores keep generation order so the search stays deterministic.
pub fn generate_ordered_moves(pos: &mut Position) -> MoveList {
    let mut moves = pos.all_legal_moves();
    let pos = &*pos;
    moves.sort_by_cached_key(|&mv| std::cmp::Reverse(score_move(pos, mv)));
    moves
}

use crate::game_repr::moves::{Move, MoveList, MoveType};
use crate::game_repr::piece::{Piece, Type};
use crate::game_repr::position::Position;
use crate::game_repr::square::{row_of, step};

impl Position {
    /// Pushes, double pushes, diagonal captures, en passant and promotions.
    pub fn pawn_moves_into(&self, idx: usize, moves: &mut MoveList) {
        let Some(pawn) = self.board[idx] else {
            return;
        };
        let color = pawn.color;
        let dir = color.pawn_direction();

        let push = |to: usize, captured: Option<Piece>, moves: &mut MoveList| {
            if row_of(to) == color.promotion_row() {
                for move_type in MoveType::PROMOTIONS {
                    moves.push(Move::new(idx as u8, to as u8, captured, move_type));
                }
            } else {
                moves.push(Move::new(idx as u8, to as u8, captured, MoveType::Normal));
            }
        };

        if let Some(one) = step(idx, 0, dir).filter(|&sq| self.board[sq].is_none()) {
            push(one, None, moves);

            if row_of(idx) == color.pawn_start_row() {
                if let Some(two) = step(one, 0, dir).filter(|&sq| self.board[sq].is_none()) {
                    moves.push(Move::new(idx as u8, two as u8, None, MoveType::Normal));
                }
            }
        }

        for file_delta in [-1, 1] {
            let Some(target) = step(idx, file_delta, dir) else {
                continue;
            };
            match self.board[target] {
                Some(p) if !p.is(color) => push(target, Some(p), moves),
                Some(_) => {}
                None if self.en_passant() == Some(target) => {
                    // The victim sits beside us, on the square we pass over
                    let victim = step(target, 0, -dir).and_then(|sq| self.board[sq]);
                    if victim == Some(Piece::new(color.opposite(), Type::Pawn)) {
                        moves.push(Move::new(idx as u8, target as u8, victim, MoveType::EnPassant));
                    }
                }
                None => {}
            }
        }
    }
}

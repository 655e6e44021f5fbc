use crate::game_repr::attacks::KING_OFFSETS;
use crate::game_repr::moves::{Move, MoveList, MoveType};
use crate::game_repr::piece::{Piece, Type};
use crate::game_repr::position::Position;

impl Position {
    /// One-square king moves plus castling.
    ///
    /// Castling needs the king on its home square, the matching right, the
    /// rook on its corner, empty squares in between, and none of the king's
    /// start, pass-through or destination squares attacked.
    pub fn king_moves_into(&self, idx: usize, moves: &mut MoveList) {
        let Some(king) = self.board[idx] else {
            return;
        };
        self.leap_into(idx, &KING_OFFSETS, moves);

        let color = king.color;
        let home = color.back_row() * 8 + 4;
        if idx != home {
            return;
        }

        let opponent = color.opposite();
        if self.is_square_attacked(idx, opponent) {
            return;
        }

        let rook = Some(Piece::new(color, Type::Rook));
        let empty = |squares: &[usize]| squares.iter().all(|&sq| self.board[sq].is_none());
        let safe = |squares: &[usize]| squares.iter().all(|&sq| !self.is_square_attacked(sq, opponent));

        if self.castling.kingside(color)
            && self.board[idx + 3] == rook
            && empty(&[idx + 1, idx + 2])
            && safe(&[idx + 1, idx + 2])
        {
            moves.push(Move::new(idx as u8, (idx + 2) as u8, None, MoveType::Castling));
        }

        // b-file square must be empty but may be attacked
        if self.castling.queenside(color)
            && self.board[idx - 4] == rook
            && empty(&[idx - 1, idx - 2, idx - 3])
            && safe(&[idx - 1, idx - 2])
        {
            moves.push(Move::new(idx as u8, (idx - 2) as u8, None, MoveType::Castling));
        }
    }
}

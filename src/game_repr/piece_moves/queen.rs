use crate::game_repr::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::game_repr::moves::MoveList;
use crate::game_repr::position::Position;

impl Position {
    /// Queen = rook rays + bishop rays
    pub fn queen_moves_into(&self, idx: usize, moves: &mut MoveList) {
        self.slide_into(idx, &ROOK_DIRECTIONS, moves);
        self.slide_into(idx, &BISHOP_DIRECTIONS, moves);
    }
}

use crate::game_repr::attacks::ROOK_DIRECTIONS;
use crate::game_repr::moves::MoveList;
use crate::game_repr::position::Position;

impl Position {
    pub fn rook_moves_into(&self, idx: usize, moves: &mut MoveList) {
        self.slide_into(idx, &ROOK_DIRECTIONS, moves);
    }
}

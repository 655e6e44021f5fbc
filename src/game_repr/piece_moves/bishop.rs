use crate::game_repr::attacks::BISHOP_DIRECTIONS;
use crate::game_repr::moves::MoveList;
use crate::game_repr::position::Position;

impl Position {
    pub fn bishop_moves_into(&self, idx: usize, moves: &mut MoveList) {
        self.slide_into(idx, &BISHOP_DIRECTIONS, moves);
    }
}

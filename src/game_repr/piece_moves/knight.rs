use crate::game_repr::attacks::KNIGHT_OFFSETS;
use crate::game_repr::moves::MoveList;
use crate::game_repr::position::Position;

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, idx: usize, moves: &mut MoveList) {
        self.leap_into(idx, &KNIGHT_OFFSETS, moves);
    }
}

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;

use super::moves::{Move, MoveList, MoveType};
use super::position::Position;
use super::square::step;

impl Position {
    /// Walks each direction from `idx` until the edge or the first piece,
    /// which is included as a capture when it belongs to the opponent.
    pub(crate) fn slide_into(&self, idx: usize, directions: &[(i32, i32)], moves: &mut MoveList) {
        let Some(mover) = self.board[idx] else {
            return;
        };

        for &(df, dr) in directions {
            let mut sq = idx;
            while let Some(target) = step(sq, df, dr) {
                match self.board[target] {
                    None => moves.push(Move::new(idx as u8, target as u8, None, MoveType::Normal)),
                    Some(p) => {
                        if !p.is(mover.color) {
                            moves.push(Move::new(idx as u8, target as u8, Some(p), MoveType::Normal));
                        }
                        break;
                    }
                }
                sq = target;
            }
        }
    }

    /// Single-step moves to each offset that is on the board and not friendly
    pub(crate) fn leap_into(&self, idx: usize, offsets: &[(i32, i32)], moves: &mut MoveList) {
        let Some(mover) = self.board[idx] else {
            return;
        };

        for target in offsets.iter().filter_map(|&(df, dr)| step(idx, df, dr)) {
            match self.board[target] {
                Some(p) if p.is(mover.color) => {}
                captured => moves.push(Move::new(idx as u8, target as u8, captured, MoveType::Normal)),
            }
        }
    }
}

use super::piece::{Color, Piece, Type};
use super::position::Position;
use super::square::step;

pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

pub(crate) const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0), (1, 1), (0, 1), (-1, 1),
    (-1, 0), (-1, -1), (0, -1), (1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Position {
    /// Check if a square is attacked by any piece of the given color.
    ///
    /// Works backwards from the target: a square is attacked by a knight if a
    /// knight stands a knight-jump away, by a rook or queen if the first piece
    /// met along an orthogonal ray is one, and so on.
    pub fn is_square_attacked(&self, idx: usize, by_color: Color) -> bool {
        let holds = |sq: Option<usize>, types: &[Type]| {
            sq.and_then(|sq| self.board[sq])
                .is_some_and(|p| p.is(by_color) && types.contains(&p.piece_type))
        };

        // Pawns of `by_color` attack diagonally forward, so look one row back
        let back = -by_color.pawn_direction();
        if holds(step(idx, -1, back), &[Type::Pawn]) || holds(step(idx, 1, back), &[Type::Pawn]) {
            return true;
        }

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(step(idx, df, dr), &[Type::Knight]))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(step(idx, df, dr), &[Type::King]))
        {
            return true;
        }

        let ray_hits = |directions: &[(i32, i32)], types: &[Type]| {
            directions.iter().any(|&(df, dr)| {
                let mut sq = idx;
                while let Some(next) = step(sq, df, dr) {
                    if let Some(p) = self.board[next] {
                        return p.is(by_color) && types.contains(&p.piece_type);
                    }
                    sq = next;
                }
                false
            })
        };

        ray_hits(&ROOK_DIRECTIONS, &[Type::Rook, Type::Queen])
            || ray_hits(&BISHOP_DIRECTIONS, &[Type::Bishop, Type::Queen])
    }

    /// Square of `color`'s king, if it has one
    pub fn king_square(&self, color: Color) -> Option<usize> {
        let king = Piece::new(color, Type::King);
        self.board.iter().position(|&p| p == Some(king))
    }

    /// Check if the king of the given color is in check.
    /// A side without a king is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|sq| self.is_square_attacked(sq, color.opposite()))
    }
}

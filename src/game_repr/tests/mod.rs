use super::*;
use super::square::parse_square;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, idx: usize, piece: Piece) {
    pos.board[idx] = Some(piece);
}

/// Square index from its algebraic name
pub fn sq(name: &str) -> usize {
    parse_square(name).unwrap_or_else(|| panic!("bad square name {name}"))
}

pub fn white(piece_type: Type) -> Piece {
    Piece::new(Color::White, piece_type)
}

pub fn black(piece_type: Type) -> Piece {
    Piece::new(Color::Black, piece_type)
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: usize, to: usize) -> bool {
    moves.iter().any(|m| m.from() == from && m.to() == to)
}

/// Helper function to count moves of a specific type
pub fn count_move_type(moves: &[Move], move_type: MoveType) -> usize {
    moves
        .iter()
        .filter(|m| {
            let mt = m.move_type();
            // Match any promotion type
            mt == move_type || (mt.is_promotion() && move_type.is_promotion())
        })
        .count()
}

/// Plays a sequence of coordinate moves, panicking on the first illegal one
pub fn play(pos: &mut Position, moves: &[&str]) {
    for text in moves {
        let mv = pos
            .parse_move(text)
            .unwrap_or_else(|e| panic!("{text}: {e} in {}", pos.to_fen()));
        pos.make_move(mv);
    }
}

// ==================== TEST MODULES ====================

mod king_movement;
mod perft;

use super::*;

mod complex_promotions;
mod endgame;
mod kiwipete;
mod middle_game;
mod starting_position;
mod symmetrical;

/// Perft from a FEN, asserting the position is restored afterwards
pub fn perft_fen(fen: &str, depth: u32) -> u64 {
    let mut pos = Position::from_fen(fen).expect("valid perft FEN");
    let before = pos.clone();
    let nodes = pos.perft(depth);
    assert_eq!(pos, before, "perft must leave the position unchanged");
    nodes
}

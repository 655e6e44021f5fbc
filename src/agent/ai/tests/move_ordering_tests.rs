// Tests for move ordering

use super::sq;
use crate::agent::ai::move_ordering::{generate_ordered_moves, score_move};
use crate::game_repr::Position;

fn ordered(fen: &str) -> (Position, Vec<String>) {
    let mut pos = Position::from_fen(fen).unwrap();
    let moves = generate_ordered_moves(&mut pos).iter().map(|m| m.to_uci()).collect();
    (pos, moves)
}

#[test]
fn test_ordering_preserves_move_set() {
    let mut pos = Position::starting();
    let mut ordered: Vec<_> = generate_ordered_moves(&mut pos).to_vec();
    let mut regular: Vec<_> = pos.all_legal_moves().to_vec();

    let key = |m: &crate::game_repr::Move| (m.from(), m.to());
    ordered.sort_by_key(key);
    regular.sort_by_key(key);
    assert_eq!(ordered, regular);
}

#[test]
fn test_central_pawn_moves_first_at_start() {
    let (_, moves) = ordered(crate::game_repr::START_FEN);
    // d/e pawn pushes score 35, other pawn pushes 15, knight moves 0
    assert!(moves[..4].iter().all(|m| m.starts_with('d') || m.starts_with('e')), "{moves:?}");
    let pawn_pushes = moves[4..16].iter().filter(|m| m.ends_with('3') || m.ends_with('4')).count();
    assert_eq!(pawn_pushes, 12);
    assert!(moves[16..].iter().all(|m| m.starts_with('b') || m.starts_with('g')));
}

#[test]
fn test_captures_prioritized() {
    let (_, moves) = ordered("rnb1kbnr/pppppppp/8/8/4q3/2N5/PPPPPPPP/R1BQKBNR w KQkq - 0 1");
    assert_eq!(moves[0], "c3e4", "Knight takes the loose queen first");
}

#[test]
fn test_mvv_lva_prefers_cheap_attacker() {
    let (mut pos, moves) = ordered("4k3/8/8/2q5/p2P4/8/8/3QK3 w - - 0 1");
    assert_eq!(moves[0], "d4c5", "Pawn takes queen");
    assert_eq!(moves.last().map(String::as_str), Some("d1a4"), "Queen takes pawn comes last");

    let mv = pos.parse_move("d1a4").unwrap();
    assert_eq!(score_move(&pos, mv), 100 - 900);
}

#[test]
fn test_promotion_prioritized() {
    let (_, moves) = ordered("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
    assert_eq!(&moves[..4], ["a7a8q", "a7a8r", "a7a8b", "a7a8n"]);
}

#[test]
fn test_castling_bonus() {
    let (pos, moves) = ordered("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    assert_eq!(moves[0], "e1g1");
    assert_eq!(pos.piece_at(sq("h1")).map(|p| p.to_char()), Some('R'));
}

#[test]
fn test_ordering_consistency() {
    let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
    assert_eq!(ordered(fen).1, ordered(fen).1);
}

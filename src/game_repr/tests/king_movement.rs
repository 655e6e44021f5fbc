use super::*;

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_moves_all_directions() {
    let mut pos = empty_board();
    place_piece(&mut pos, sq("d4"), white(Type::King));

    let moves = pos.legal_moves(sq("d4"));
    assert_eq!(moves.len(), 8, "King should have 8 moves from center");
    for target in ["c3", "c4", "c5", "d3", "d5", "e3", "e4", "e5"] {
        assert!(has_move(&moves, sq("d4"), sq(target)), "missing d4{target}");
    }
}

#[test]
fn test_king_cannot_capture_own_pieces() {
    let mut pos = empty_board();
    place_piece(&mut pos, sq("d4"), white(Type::King));
    for own in ["c4", "e4", "d3", "d5"] {
        place_piece(&mut pos, sq(own), white(Type::Pawn));
    }

    let moves = pos.legal_moves(sq("d4"));
    assert_eq!(moves.len(), 4, "King should not capture own pieces");
}

#[test]
fn test_king_in_corner() {
    let mut pos = empty_board();
    place_piece(&mut pos, sq("h8"), black(Type::King));

    let moves = pos.legal_moves(sq("h8"));
    assert_eq!(moves.len(), 3);
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    let mut pos = empty_board();
    place_piece(&mut pos, sq("e1"), white(Type::King));
    place_piece(&mut pos, sq("e2"), black(Type::Pawn));
    place_piece(&mut pos, sq("d3"), black(Type::Pawn));

    let moves = pos.legal_moves(sq("e1"));
    assert!(!has_move(&moves, sq("e1"), sq("e2")), "e2 is defended by d3");
    assert!(!has_move(&moves, sq("e1"), sq("d1")), "d1 is covered by e2");
    assert!(has_move(&moves, sq("e1"), sq("d2")));
    assert!(has_move(&moves, sq("e1"), sq("f2")));
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_kings_cannot_touch() {
    let mut pos = empty_board();
    place_piece(&mut pos, sq("e4"), white(Type::King));
    place_piece(&mut pos, sq("e6"), black(Type::King));

    let moves = pos.legal_moves(sq("e4"));
    for forbidden in ["d5", "e5", "f5"] {
        assert!(!has_move(&moves, sq("e4"), sq(forbidden)));
    }
    assert_eq!(moves.len(), 5);
}

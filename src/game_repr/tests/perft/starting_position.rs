use super::*;

// ==================== STARTING POSITION PERFT TESTS ====================

#[test]
fn test_perft_starting_depth_0() {
    assert_eq!(perft_fen(START_FEN, 0), 1);
}

#[test]
fn test_perft_starting_depth_1() {
    assert_eq!(perft_fen(START_FEN, 1), 20);
}

#[test]
fn test_perft_starting_depth_2() {
    assert_eq!(perft_fen(START_FEN, 2), 400);
}

#[test]
fn test_perft_starting_depth_3() {
    assert_eq!(perft_fen(START_FEN, 3), 8902);
}

#[test]
fn test_perft_starting_depth_4() {
    assert_eq!(perft_fen(START_FEN, 4), 197281);
}

#[test]
#[ignore]
fn test_perft_starting_depth_5() {
    assert_eq!(perft_fen(START_FEN, 5), 4865609);
}

#[test]
fn test_divide_sums_to_perft() {
    let mut pos = Position::starting();
    let divided = pos.divide(3);
    assert_eq!(divided.len(), 20);
    assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 8902);

    let e2e4 = divided.iter().find(|(m, _)| m.to_uci() == "e2e4").map(|(_, n)| *n);
    assert_eq!(e2e4, Some(600));
}

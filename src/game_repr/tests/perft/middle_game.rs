use super::*;

// ==================== MIDDLE GAME PERFT TESTS ====================
// Position 5

const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

#[test]
fn test_perft_middle_game_depth_1() {
    assert_eq!(perft_fen(POSITION_5, 1), 44);
}

#[test]
fn test_perft_middle_game_depth_2() {
    assert_eq!(perft_fen(POSITION_5, 2), 1486);
}

#[test]
fn test_perft_middle_game_depth_3() {
    assert_eq!(perft_fen(POSITION_5, 3), 62379);
}

#[test]
#[ignore]
fn test_perft_middle_game_depth_4() {
    assert_eq!(perft_fen(POSITION_5, 4), 2103487);
}

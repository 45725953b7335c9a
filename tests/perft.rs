use tapchess::perft::{perft, root_moves};
use tapchess::Board;

#[test]
fn perft_startpos_small_depths() {
    let b = Board::new();
    assert_eq!(perft(&b, 0), 1);
    assert_eq!(perft(&b, 1), 20);
    assert_eq!(perft(&b, 2), 400);
}

#[test]
fn root_moves_belong_to_side_to_move() {
    let b = Board::new();
    let moves = root_moves(&b);
    assert_eq!(moves.len(), 20);
    assert!(moves.iter().all(|(from, _)| from.row >= 6));
}

use crate::board::{Board, Position};

/// Count move sequences of length `depth` under this engine's rules.
/// Clones per child, like the cozy fallback it was modelled on.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let mut nodes = 0u64;
    for (from, to) in root_moves(board) {
        let mut child = board.clone();
        child.move_piece(from, to);
        nodes += perft(&child, depth - 1);
    }
    nodes
}

/// All `(from, to)` pairs the side to move may play.
pub fn root_moves(board: &Board) -> Vec<(Position, Position)> {
    let turn = board.current_turn();
    Position::all()
        .filter(|&from| matches!(board.piece_at(from), Some(p) if p.color == turn))
        .flat_map(|from| board.legal_destinations(from).into_iter().map(move |to| (from, to)))
        .collect()
}

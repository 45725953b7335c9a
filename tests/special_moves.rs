use pretty_assertions::assert_eq;
use tapchess::{Board, MoveRejection, Piece, PieceColor, PieceType, Position};

fn sq(name: &str) -> Position { Position::from_name(name).unwrap() }
fn at(row: u8, col: u8) -> Position { Position::new(row, col).unwrap() }

const EN_PASSANT_SETUP: &str = "\
....k...
.....p..
........
....P...
........
........
........
....K...";

#[test]
fn en_passant_removes_the_passed_pawn() {
    let mut b = Board::from_diagram(EN_PASSANT_SETUP, PieceColor::Black).unwrap();
    assert!(b.move_piece(at(1, 5), at(3, 5)));
    assert!(b.move_piece(at(3, 4), at(2, 5)));
    assert_eq!(b.piece_at(at(3, 5)), None);
    let mover = b.piece_at(at(2, 5)).unwrap();
    assert_eq!((mover.kind, mover.color), (PieceType::Pawn, PieceColor::White));
    assert_eq!(b.white_captured().len(), 1);
    assert_eq!(b.white_captured()[0].kind, PieceType::Pawn);
    assert_eq!(b.white_captured()[0].color, PieceColor::Black);
    assert_eq!(b.en_passant_target(), None);
    assert_eq!(b.current_turn(), PieceColor::Black);
}

#[test]
fn en_passant_expires_after_one_reply() {
    let mut b = Board::from_diagram(EN_PASSANT_SETUP, PieceColor::Black).unwrap();
    assert!(b.move_piece(at(1, 5), at(3, 5)));
    assert!(b.move_piece(sq("e1"), sq("d1")));
    assert!(b.move_piece(sq("e8"), sq("d8")));
    let before = b.snapshot();
    assert!(!b.move_piece(at(3, 4), at(2, 5)));
    assert_eq!(b.snapshot(), before);
}

#[test]
fn black_en_passant_goes_to_black_captured() {
    let diagram = "....k...\n........\n........\n........\n...p....\n........\n....P...\n....K...";
    let mut b = Board::from_diagram(diagram, PieceColor::White).unwrap();
    assert!(b.move_piece(sq("e2"), sq("e4")));
    assert!(b.move_piece(sq("d4"), sq("e3")));
    assert_eq!(b.piece_at(sq("e4")), None);
    assert_eq!(b.piece_at(sq("d4")), None);
    let pawn = b.piece_at(sq("e3")).unwrap();
    assert_eq!((pawn.kind, pawn.color), (PieceType::Pawn, PieceColor::Black));
    assert_eq!(b.black_captured(), &[Piece { kind: PieceType::Pawn, color: PieceColor::White, has_moved: true }]);
    assert!(b.white_captured().is_empty());
    assert_eq!(b.en_passant_target(), None);
    assert_eq!(b.current_turn(), PieceColor::White);
}

#[test]
fn single_step_opens_no_window() {
    let diagram = "....k...\n........\n.....p..\n....P...\n........\n........\n........\n....K...";
    let mut b = Board::from_diagram(diagram, PieceColor::Black).unwrap();
    assert!(b.move_piece(at(2, 5), at(3, 5)));
    assert_eq!(b.en_passant_target(), None);
    assert!(!b.move_piece(at(3, 4), at(2, 5)));
}

#[test]
fn white_promotion_waits_for_choice() {
    let diagram = "....k...\nP.......\n........\n........\n........\n........\n........\n....K...";
    let mut b = Board::from_diagram(diagram, PieceColor::White).unwrap();
    assert!(b.move_piece(at(1, 0), at(0, 0)));
    assert_eq!(b.pending_promotion(), Some(at(0, 0)));
    assert!(b.is_piece_promoted());
    assert_eq!(b.piece_at(at(0, 0)).map(|p| p.kind), Some(PieceType::Pawn));
    b.promote(PieceType::Queen);
    let queen = b.piece_at(at(0, 0)).unwrap();
    assert_eq!((queen.kind, queen.color), (PieceType::Queen, PieceColor::White));
    assert_eq!(b.pending_promotion(), None);
    assert!(!b.is_piece_promoted());
}

#[test]
fn black_promotes_by_capture_and_play_continues() {
    let diagram = "....k...\n........\n........\n........\n........\n........\n...p....\n..R.K...";
    let mut b = Board::from_diagram(diagram, PieceColor::Black).unwrap();
    assert!(b.move_piece(sq("d2"), sq("c1")));
    assert_eq!(b.pending_promotion(), Some(sq("c1")));
    assert_eq!(b.black_captured()[0].kind, PieceType::Rook);
    // a pending promotion does not block the next move
    assert!(b.move_piece(sq("e1"), sq("d1")));
    assert_eq!(b.pending_promotion(), Some(sq("c1")));
    b.promote(PieceType::Knight);
    assert_eq!(b.piece_at(sq("c1")), Some(Piece { kind: PieceType::Knight, color: PieceColor::Black, has_moved: true }));
}

#[test]
fn promote_accepts_any_piece_type() {
    let diagram = "....k...\nP.......\n........\n........\n........\n........\n........\n....K...";
    let mut b = Board::from_diagram(diagram, PieceColor::White).unwrap();
    assert!(b.move_piece(at(1, 0), at(0, 0)));
    b.promote(PieceType::King);
    assert_eq!(b.piece_at(at(0, 0)).map(|p| p.kind), Some(PieceType::King));
}

#[test]
fn castling_moves_king_two_and_rook_beside_it() {
    let diagram = "r...k..r\n........\n........\n........\n........\n........\n........\nR...K..R";
    let mut b = Board::from_diagram(diagram, PieceColor::White).unwrap();
    assert!(b.move_piece(sq("e1"), sq("h1")));
    assert_eq!(b.render().lines().last(), Some("R....RK."));
    assert!(b.move_piece(sq("e8"), sq("a8")));
    assert_eq!(b.render().lines().next(), Some("..kr...r"));
    assert!(b.white_captured().is_empty() && b.black_captured().is_empty());
}

#[test]
fn castling_ignores_earlier_moves() {
    let diagram = "....k...\n........\n........\n........\n........\n........\n........\nR...K...";
    let mut b = Board::from_diagram(diagram, PieceColor::White).unwrap();
    assert!(b.move_piece(sq("e1"), sq("e2")));
    assert!(b.move_piece(sq("e8"), sq("e7")));
    assert!(b.move_piece(sq("e2"), sq("e1")));
    assert!(b.move_piece(sq("e7"), sq("e8")));
    assert!(b.move_piece(sq("e1"), sq("a1")));
    assert_eq!(b.piece_at(sq("c1")).map(|p| p.kind), Some(PieceType::King));
    assert_eq!(b.piece_at(sq("d1")).map(|p| p.kind), Some(PieceType::Rook));
}

#[test]
fn castling_blocked_by_piece_between() {
    let diagram = "....k...\n........\n........\n........\n........\n........\n........\nR..QK..R";
    let mut b = Board::from_diagram(diagram, PieceColor::White).unwrap();
    let before = b.snapshot();
    assert!(!b.move_piece(sq("e1"), sq("a1")));
    assert_eq!(b.snapshot(), before);
    assert!(b.move_piece(sq("e1"), sq("h1")));
}

#[test]
fn castling_off_the_edge_is_refused_and_selects_rook() {
    let diagram = "....k...\n........\n........\n........\n........\n........\n........\n......KR";
    let mut b = Board::from_diagram(diagram, PieceColor::White).unwrap();
    let before = b.snapshot();
    assert_eq!(b.plan_move(sq("g1"), sq("h1")), Err(MoveRejection::IllegalPattern));
    b.select_piece(sq("g1"));
    b.select_piece(sq("h1"));
    assert!(b.is_selected(sq("h1")));
    assert_eq!(b.snapshot().without_selection(), before);
    assert_eq!(b.current_turn(), PieceColor::White);
}

#[test]
fn castling_onto_an_occupied_landing_is_refused() {
    let diagram = "....k...\n........\n........\n........\n........\n........\n........\n....KRN.";
    let mut b = Board::from_diagram(diagram, PieceColor::White).unwrap();
    let before = b.snapshot();
    assert_eq!(b.plan_move(sq("e1"), sq("f1")), Err(MoveRejection::CastleBlocked(sq("f1"))));
    assert!(!b.move_piece(sq("e1"), sq("f1")));
    assert_eq!(b.snapshot(), before);
}

#[test]
fn castling_with_a_near_rook_keeps_both_pieces() {
    for row in ["....KR..", "....K.R."] {
        let diagram = format!("....k...\n........\n........\n........\n........\n........\n........\n{row}");
        let mut b = Board::from_diagram(&diagram, PieceColor::White).unwrap();
        let rook = if row.ends_with("R..") { sq("f1") } else { sq("g1") };
        assert!(b.move_piece(sq("e1"), rook), "{row}");
        assert_eq!(b.render().lines().last(), Some(".....RK."), "{row}");
        assert!(b.white_captured().is_empty() && b.black_captured().is_empty());
        assert_eq!(b.current_turn(), PieceColor::Black);
    }
}

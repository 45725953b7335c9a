use log::warn;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use crate::board::{Board, Piece, PieceType, Position, BOARD_SIZE};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SoakReport {
    pub seed: u64,
    pub taps: usize,
    pub moves: usize,
    pub captures: usize,
    pub promotions: usize,
    pub king_captured: bool,
    pub violations: Vec<String>,
}

impl SoakReport {
    pub fn is_clean(&self) -> bool { self.violations.is_empty() }
}

/// Drive one board from the starting layout with `taps` random taps and
/// check the engine's invariants after each one. Stops early when a king falls.
pub fn run(seed: u64, taps: usize) -> SoakReport {
    run_from(Board::new(), seed, taps)
}

pub fn run_from(board: Board, seed: u64, taps: usize) -> SoakReport {
    let mut soak = Soak::new(board, seed);
    for _ in 0..taps {
        if soak.finished() {
            break;
        }
        soak.step();
    }
    soak.into_report()
}

/// One board under random taps, with the running invariant report.
pub struct Soak {
    board: Board,
    rng: SmallRng,
    report: SoakReport,
}

impl Soak {
    pub fn new(board: Board, seed: u64) -> Self {
        let mut soak = Self {
            board,
            rng: SmallRng::seed_from_u64(seed),
            report: SoakReport { seed, ..SoakReport::default() },
        };
        soak.note_king_capture();
        soak
    }

    pub fn board(&self) -> &Board { &self.board }

    pub fn finished(&self) -> bool { self.report.king_captured }

    /// Resolve a pending promotion with a random piece type, or make one random tap.
    pub fn step(&mut self) {
        if self.board.is_piece_promoted() {
            let kind = PieceType::ALL[self.rng.gen_range(0..PieceType::ALL.len())];
            self.board.promote(kind);
            self.report.promotions += 1;
            return;
        }
        // bias toward the selection's legal targets so games actually progress
        let target = match self.board.selected() {
            Some(from) if self.rng.gen_bool(0.7) => {
                let targets = self.board.legal_destinations(from);
                if targets.is_empty() {
                    random_square(&mut self.rng)
                } else {
                    targets[self.rng.gen_range(0..targets.len())]
                }
            }
            _ => random_square(&mut self.rng),
        };
        self.tap(target);
    }

    pub fn tap(&mut self, target: Position) {
        let before = self.board.clone();
        self.board.select_piece(target);
        self.report.taps += 1;
        check_tap(&before, &self.board, &mut self.report);
        if self.board.current_turn() != before.current_turn() {
            self.report.moves += 1;
        }
        self.note_king_capture();
    }

    pub fn into_report(self) -> SoakReport {
        for v in &self.report.violations {
            warn!("seed {}: {}", self.report.seed, v);
        }
        self.report
    }

    fn note_king_capture(&mut self) {
        if self.board.is_white_king_captured() || self.board.is_black_king_captured() {
            self.report.king_captured = true;
        }
    }
}

fn random_square(rng: &mut SmallRng) -> Position {
    Position { row: rng.gen_range(0..BOARD_SIZE), col: rng.gen_range(0..BOARD_SIZE) }
}

fn check_tap(before: &Board, after: &Board, report: &mut SoakReport) {
    let moved = after.current_turn() != before.current_turn();
    if moved {
        if after.current_turn() != before.current_turn().opponent() {
            report.violations.push("turn did not alternate".to_string());
        }
        if after.selected().is_some() {
            report.violations.push("selection survived an applied move".to_string());
        }
    } else if after.snapshot().without_selection() != before.snapshot().without_selection() {
        report.violations.push(format!("state changed without a move at {:?}", after.selected()));
    }
    if !is_prefix(before.white_captured(), after.white_captured())
        || !is_prefix(before.black_captured(), after.black_captured())
    {
        report.violations.push("capture list shrank or was rewritten".to_string());
    }
    let total = |b: &Board| b.white_captured().len() + b.black_captured().len();
    report.captures += total(after).saturating_sub(total(before));
    if (before.is_white_king_captured() && !after.is_white_king_captured())
        || (before.is_black_king_captured() && !after.is_black_king_captured())
    {
        report.violations.push("king-captured flag was reset".to_string());
    }
    let kings = |b: &Board| {
        Position::all()
            .filter(|&p| matches!(b.piece_at(p), Some(pc) if pc.kind == PieceType::King))
            .count()
    };
    let expected = 2 - usize::from(after.is_white_king_captured()) - usize::from(after.is_black_king_captured());
    if kings(after) < expected {
        report.violations.push("a king vanished without being captured".to_string());
    }
}

fn is_prefix(prefix: &[Piece], list: &[Piece]) -> bool {
    list.len() >= prefix.len() && list[..prefix.len()] == *prefix
}

pub mod types;
pub mod layout;
pub mod rules;
mod apply;

use log::trace;
use serde::{Deserialize, Serialize};

pub use rules::MovePlan;
pub use types::{Piece, PieceColor, PieceType, Position, BOARD_SIZE};

pub type Grid = [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// The pawn that just advanced two squares and may be taken en passant
/// during the opponent's next move only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnPassantTarget {
    pub square: Position,
    pub color: PieceColor,
}

/// Rule and state engine for one game. Front-ends drive it through
/// [`Board::select_piece`] and [`Board::promote`] and render the accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    current_turn: PieceColor,
    selected: Option<Position>,
    en_passant: Option<EnPassantTarget>,
    pending_promotion: Option<Position>,
    white_captured: Vec<Piece>,
    black_captured: Vec<Piece>,
    white_king_captured: bool,
    black_king_captured: bool,
}

impl Default for Board {
    fn default() -> Self { Self::new() }
}

impl Board {
    /// Standard starting layout, White to move.
    pub fn new() -> Self { Self::with_grid(layout::standard(), PieceColor::White) }

    pub fn with_grid(grid: Grid, current_turn: PieceColor) -> Self {
        Self {
            grid,
            current_turn,
            selected: None,
            en_passant: None,
            pending_promotion: None,
            white_captured: Vec::new(),
            black_captured: Vec::new(),
            white_king_captured: false,
            black_king_captured: false,
        }
    }

    /// `None` for empty squares and for coordinates off the grid.
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.grid.get(pos.row as usize)?.get(pos.col as usize).copied().flatten()
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn current_turn(&self) -> PieceColor { self.current_turn }
    pub fn selected(&self) -> Option<Position> { self.selected }
    pub fn is_selected(&self, pos: Position) -> bool { self.selected == Some(pos) }
    pub fn en_passant_target(&self) -> Option<EnPassantTarget> { self.en_passant }
    pub fn pending_promotion(&self) -> Option<Position> { self.pending_promotion }
    pub fn is_piece_promoted(&self) -> bool { self.pending_promotion.is_some() }

    /// Pieces White has taken, in capture order.
    pub fn white_captured(&self) -> &[Piece] { &self.white_captured }
    /// Pieces Black has taken, in capture order.
    pub fn black_captured(&self) -> &[Piece] { &self.black_captured }

    pub fn is_white_king_captured(&self) -> bool { self.white_king_captured }
    pub fn is_black_king_captured(&self) -> bool { self.black_king_captured }

    /// Side whose opponent lost its king, if any.
    pub fn winner(&self) -> Option<PieceColor> {
        match (self.white_king_captured, self.black_king_captured) {
            (true, false) => Some(PieceColor::Black),
            (false, true) => Some(PieceColor::White),
            _ => None,
        }
    }

    /// Handle one tap on `target`.
    ///
    /// With nothing selected, a tap on a piece of the side to move selects it.
    /// With a selection, tapping it again clears it, tapping another friendly
    /// piece moves the selection there, and any other tap attempts a move.
    /// A failed attempt keeps the selection. King-then-own-rook attempts the
    /// castle and falls back to selecting the rook.
    pub fn select_piece(&mut self, target: Position) {
        if !target.is_on_board() { return; }
        let target_piece = self.piece_at(target);
        let Some(from) = self.selected else {
            if matches!(target_piece, Some(p) if p.color == self.current_turn) {
                self.selected = Some(target);
            }
            return;
        };
        if from == target {
            self.selected = None;
            return;
        }
        match (self.piece_at(from), target_piece) {
            (Some(mover), Some(other)) if mover.color == other.color => {
                if mover.kind == PieceType::King && other.kind == PieceType::Rook {
                    self.selected = if self.move_piece(from, target) { None } else { Some(target) };
                } else {
                    self.selected = Some(target);
                }
            }
            _ => {
                if self.move_piece(from, target) {
                    self.selected = None;
                }
            }
        }
    }

    /// Validate and apply a move. Returns `false` and leaves every piece of
    /// state untouched when the move is refused.
    pub fn move_piece(&mut self, from: Position, to: Position) -> bool {
        match self.plan_move(from, to) {
            Ok(plan) => {
                self.commit(plan);
                true
            }
            Err(reason) => {
                trace!("rejected {} -> {}: {}", from, to, reason);
                false
            }
        }
    }

    /// Resolve a pending promotion. Any piece type is accepted; no-op when
    /// nothing is pending.
    pub fn promote(&mut self, kind: PieceType) {
        let Some(pos) = self.pending_promotion else { return };
        if let Some(piece) = self.grid[pos.row as usize][pos.col as usize].as_mut() {
            piece.kind = kind;
            log::info!("{} promoted to {:?} at {}", piece.color, kind, pos.name());
        }
        self.pending_promotion = None;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid,
            current_turn: self.current_turn,
            selected: self.selected,
            en_passant_target: self.en_passant,
            pending_promotion: self.pending_promotion,
            is_piece_promoted: self.is_piece_promoted(),
            white_captured: self.white_captured.clone(),
            black_captured: self.black_captured.clone(),
            is_white_king_captured: self.white_king_captured,
            is_black_king_captured: self.black_king_captured,
        }
    }

    fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.grid[pos.row as usize][pos.col as usize] = piece;
    }

    fn take(&mut self, pos: Position) -> Option<Piece> {
        self.grid[pos.row as usize][pos.col as usize].take()
    }
}

/// Read-only view of everything a presentation layer renders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Grid,
    pub current_turn: PieceColor,
    pub selected: Option<Position>,
    pub en_passant_target: Option<EnPassantTarget>,
    pub pending_promotion: Option<Position>,
    pub is_piece_promoted: bool,
    pub white_captured: Vec<Piece>,
    pub black_captured: Vec<Piece>,
    pub is_white_king_captured: bool,
    pub is_black_king_captured: bool,
}

impl Snapshot {
    /// Same view with the highlight cleared, for comparing game state only.
    pub fn without_selection(mut self) -> Self {
        self.selected = None;
        self
    }
}

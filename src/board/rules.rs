use crate::error::MoveRejection;
use super::{Board, Piece, PieceType, Position};

/// A validated move, ready to be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MovePlan {
    /// Plain relocation, capturing whatever enemy piece stands on `to`.
    Step { from: Position, to: Position, double_advance: bool },
    /// Pawn lands on the empty `to` and removes the pawn on `captured`.
    EnPassant { from: Position, to: Position, captured: Position },
    Castle { king_from: Position, king_to: Position, rook_from: Position, rook_to: Position },
}

impl Board {
    /// Check `from -> to` against the movement rules without touching the board.
    pub fn plan_move(&self, from: Position, to: Position) -> Result<MovePlan, MoveRejection> {
        if !to.is_on_board() {
            return Err(MoveRejection::OffBoard(to));
        }
        let piece = self.piece_at(from).ok_or(MoveRejection::NoPiece(from))?;
        if piece.color != self.current_turn() {
            return Err(MoveRejection::WrongTurn(from));
        }
        if from == to {
            return Err(MoveRejection::SameSquare);
        }
        let (d_row, d_col) = delta(from, to);
        let straight = d_row == 0 || d_col == 0;
        let diagonal = d_row.abs() == d_col.abs();
        let (shape_ok, slides) = match piece.kind {
            PieceType::Pawn => return self.plan_pawn(piece, from, to),
            PieceType::King => return self.plan_king(piece, from, to),
            PieceType::Rook => (straight, true),
            PieceType::Bishop => (diagonal, true),
            PieceType::Queen => (straight || diagonal, true),
            PieceType::Knight => (matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2)), false),
        };
        if matches!(self.piece_at(to), Some(t) if t.color == piece.color) {
            return Err(MoveRejection::OwnPieceAtTarget(to));
        }
        if !shape_ok {
            return Err(MoveRejection::IllegalPattern);
        }
        if slides && !self.path_clear(from, to) {
            return Err(MoveRejection::PathBlocked(to));
        }
        Ok(MovePlan::Step { from, to, double_advance: false })
    }

    /// Every square the piece on `from` could move to right now.
    pub fn legal_destinations(&self, from: Position) -> Vec<Position> {
        Position::all().filter(|&to| self.plan_move(from, to).is_ok()).collect()
    }

    fn plan_pawn(&self, pawn: Piece, from: Position, to: Position) -> Result<MovePlan, MoveRejection> {
        let forward = pawn.color.forward();
        let (d_row, d_col) = delta(from, to);
        match self.piece_at(to) {
            Some(t) if t.color == pawn.color => Err(MoveRejection::OwnPieceAtTarget(to)),
            Some(_) if d_row == forward && d_col.abs() == 1 => {
                Ok(MovePlan::Step { from, to, double_advance: false })
            }
            None if d_col == 0 && d_row == forward => {
                Ok(MovePlan::Step { from, to, double_advance: false })
            }
            // only the landing square is checked, the passed-over square is not
            None if d_col == 0 && d_row == 2 * forward && !pawn.has_moved => {
                Ok(MovePlan::Step { from, to, double_advance: true })
            }
            None if d_row == forward && d_col.abs() == 1 => {
                let beside = Position { row: from.row, col: to.col };
                let capturable = self.en_passant_target().is_some_and(|ep| {
                    ep.square == beside
                        && ep.color != pawn.color
                        && matches!(self.piece_at(beside), Some(p) if p.kind == PieceType::Pawn && p.color == ep.color)
                });
                if capturable {
                    Ok(MovePlan::EnPassant { from, to, captured: beside })
                } else {
                    Err(MoveRejection::IllegalPattern)
                }
            }
            _ => Err(MoveRejection::IllegalPattern),
        }
    }

    fn plan_king(&self, king: Piece, from: Position, to: Position) -> Result<MovePlan, MoveRejection> {
        let (d_row, d_col) = delta(from, to);
        match self.piece_at(to) {
            Some(t) if t.color == king.color && t.kind == PieceType::Rook => self.plan_castle(from, to),
            Some(t) if t.color == king.color => Err(MoveRejection::OwnPieceAtTarget(to)),
            _ if d_row.abs().max(d_col.abs()) == 1 => Ok(MovePlan::Step { from, to, double_advance: false }),
            _ => Err(MoveRejection::IllegalPattern),
        }
    }

    /// King two squares toward the rook, rook on the square the king crossed.
    /// Neither piece's history nor attacked squares are considered.
    fn plan_castle(&self, king_from: Position, rook_from: Position) -> Result<MovePlan, MoveRejection> {
        if king_from.row != rook_from.row {
            return Err(MoveRejection::IllegalPattern);
        }
        let side: i8 = if rook_from.col > king_from.col { 1 } else { -1 };
        let row = king_from.row;
        let (lo, hi) = (king_from.col.min(rook_from.col), king_from.col.max(rook_from.col));
        if (lo + 1..hi).any(|col| self.piece_at(Position { row, col }).is_some()) {
            return Err(MoveRejection::CastleBlocked(rook_from));
        }
        let king_to = king_from.offset(0, 2 * side).ok_or(MoveRejection::IllegalPattern)?;
        let rook_to = king_to.offset(0, -side).ok_or(MoveRejection::IllegalPattern)?;
        let vacated = |pos: Position| pos == king_from || pos == rook_from;
        for dest in [king_to, rook_to] {
            if !vacated(dest) && self.piece_at(dest).is_some() {
                return Err(MoveRejection::CastleBlocked(rook_from));
            }
        }
        Ok(MovePlan::Castle { king_from, king_to, rook_from, rook_to })
    }

    /// Squares strictly between `from` and `to` along a rank, file or diagonal are empty.
    fn path_clear(&self, from: Position, to: Position) -> bool {
        let (d_row, d_col) = delta(from, to);
        let (s_row, s_col) = (d_row.signum(), d_col.signum());
        let mut cur = from;
        loop {
            cur = match cur.offset(s_row, s_col) {
                Some(next) => next,
                None => return false,
            };
            if cur == to { return true; }
            if self.piece_at(cur).is_some() { return false; }
        }
    }
}

/// Signed `(to - from)` in rows and columns.
fn delta(from: Position, to: Position) -> (i8, i8) {
    (to.row as i8 - from.row as i8, to.col as i8 - from.col as i8)
}

use log::{debug, info};
use super::{Board, EnPassantTarget, MovePlan, Piece, PieceColor, PieceType, Position};

impl Board {
    /// Apply a plan produced by `plan_move` for the side to move.
    pub(super) fn commit(&mut self, plan: MovePlan) {
        let mover = self.current_turn;
        match plan {
            MovePlan::Step { from, to, double_advance } => {
                let Some(mut piece) = self.take(from) else { return };
                if let Some(victim) = self.take(to) {
                    self.record_capture(mover, victim);
                }
                piece.has_moved = true;
                self.set(to, Some(piece));
                if double_advance {
                    self.en_passant = Some(EnPassantTarget { square: to, color: mover });
                }
                self.flag_promotion(piece, to);
            }
            MovePlan::EnPassant { from, to, captured } => {
                let Some(mut piece) = self.take(from) else { return };
                if let Some(victim) = self.take(captured) {
                    self.record_capture(mover, victim);
                }
                self.en_passant = None;
                piece.has_moved = true;
                self.set(to, Some(piece));
                self.flag_promotion(piece, to);
            }
            MovePlan::Castle { king_from, king_to, rook_from, rook_to } => {
                let king = self.take(king_from);
                let rook = self.take(rook_from);
                self.set(king_to, king);
                self.set(rook_to, rook);
            }
        }
        self.end_turn(mover);
        debug!("{} moved\n{}", mover, self.render());
    }

    fn record_capture(&mut self, mover: PieceColor, victim: Piece) {
        match mover {
            PieceColor::White => self.white_captured.push(victim),
            PieceColor::Black => self.black_captured.push(victim),
        }
        if victim.kind == PieceType::King {
            match victim.color {
                PieceColor::White => self.white_king_captured = true,
                PieceColor::Black => self.black_king_captured = true,
            }
            info!("{} king captured, {} wins", victim.color, mover);
        }
    }

    fn flag_promotion(&mut self, piece: Piece, to: Position) {
        if piece.kind == PieceType::Pawn && to.row == piece.color.promotion_row() {
            self.pending_promotion = Some(to);
            info!("{} pawn awaiting promotion at {}", piece.color, to.name());
        }
    }

    /// Pass the move to the opponent. An en passant window opened by the
    /// opponent closes here; one opened by `mover` stays for one reply.
    fn end_turn(&mut self, mover: PieceColor) {
        if self.en_passant.is_some_and(|ep| ep.color != mover) {
            self.en_passant = None;
        }
        self.current_turn = mover.opponent();
    }
}

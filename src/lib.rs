// Tap-driven chess rule engine plus the tools around it
pub mod board;
pub mod error;
pub mod perft;
pub mod session;
pub mod soak;

pub use board::{Board, Piece, PieceColor, PieceType, Position, Snapshot};
pub use error::{BoardError, LayoutError, MoveRejection};

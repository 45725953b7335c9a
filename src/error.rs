use crate::board::types::Position;

/// Construction and parsing failures at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate out of range: ({row}, {col})")]
    OutOfRange { row: i32, col: i32 },
    #[error("invalid square name: {0}")]
    InvalidSquare(String),
    #[error("invalid piece letter: {0}")]
    InvalidPiece(char),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),
    #[error("row {row} has {width} cells, expected 8")]
    RowWidth { row: usize, width: usize },
    #[error("row {row}: {source}")]
    Cell { row: usize, source: BoardError },
}

/// Why a move attempt was refused. The board is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("{0} is off the board")]
    OffBoard(Position),
    #[error("no piece at {0}")]
    NoPiece(Position),
    #[error("piece at {0} does not belong to the side to move")]
    WrongTurn(Position),
    #[error("source and target are the same square")]
    SameSquare,
    #[error("target {0} holds a friendly piece")]
    OwnPieceAtTarget(Position),
    #[error("piece cannot move that way")]
    IllegalPattern,
    #[error("path to {0} is blocked")]
    PathBlocked(Position),
    #[error("castling toward {0} is blocked")]
    CastleBlocked(Position),
}

/// A front-end line that could not be turned into an engine call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("missing argument for {0}")]
    Missing(&'static str),
    #[error("invalid number: {0}")]
    Number(String),
}

use std::fmt;
use serde::{Deserialize, Serialize};
use crate::error::BoardError;

pub const BOARD_SIZE: u8 = 8;

/// Zero-based grid coordinate. Row 0 is Black's back rank, row 7 White's.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Result<Self, BoardError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(BoardError::OutOfRange { row: row as i32, col: col as i32 });
        }
        Ok(Self { row, col })
    }

    #[inline]
    pub fn is_on_board(self) -> bool { self.row < BOARD_SIZE && self.col < BOARD_SIZE }

    /// Neighbouring square by a signed delta, `None` once it falls off the grid.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }

    /// Square name as printed on a physical board ("e2" is row 6, col 4).
    /// Off-board coordinates fall back to the `(row, col)` form.
    pub fn name(self) -> String {
        if !self.is_on_board() {
            return self.to_string();
        }
        let file = (b'a' + self.col) as char;
        let rank = (b'0' + (BOARD_SIZE - self.row)) as char;
        format!("{file}{rank}")
    }

    pub fn from_name(name: &str) -> Result<Self, BoardError> {
        let bytes = name.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(BoardError::InvalidSquare(name.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(BoardError::InvalidSquare(name.to_string()));
        }
        Ok(Self { row: BOARD_SIZE - (rank - b'0'), col: file - b'a' })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    #[inline]
    pub fn back_row(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    #[inline]
    pub fn pawn_start_row(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    /// Far rank where this color's pawns await promotion.
    #[inline]
    pub fn promotion_row(self) -> u8 {
        self.opponent().back_row()
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceColor::White => write!(f, "White"),
            PieceColor::Black => write!(f, "Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    King,
    Queen,
    Rook,
    Knight,
    Bishop,
    Pawn,
}

impl PieceType {
    pub const ALL: [PieceType; 6] = [
        PieceType::King,
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Pawn,
    ];

    pub fn letter(self) -> char {
        match self {
            PieceType::King => 'k',
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Pawn => 'p',
        }
    }

    /// Case-insensitive letter lookup.
    pub fn from_letter(c: char) -> Result<Self, BoardError> {
        match c.to_ascii_lowercase() {
            'k' => Ok(PieceType::King),
            'q' => Ok(PieceType::Queen),
            'r' => Ok(PieceType::Rook),
            'n' => Ok(PieceType::Knight),
            'b' => Ok(PieceType::Bishop),
            'p' => Ok(PieceType::Pawn),
            _ => Err(BoardError::InvalidPiece(c)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: PieceColor,
    /// Only pawns start unmoved; the flag gates the two-square advance.
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceType, color: PieceColor) -> Self {
        Self { kind, color, has_moved: kind != PieceType::Pawn }
    }

    /// Uppercase for White, lowercase for Black.
    pub fn letter(&self) -> char {
        match self.color {
            PieceColor::White => self.kind.letter().to_ascii_uppercase(),
            PieceColor::Black => self.kind.letter(),
        }
    }

    pub fn from_letter(c: char) -> Result<Self, BoardError> {
        let kind = PieceType::from_letter(c)?;
        let color = if c.is_ascii_uppercase() { PieceColor::White } else { PieceColor::Black };
        Ok(Self::new(kind, color))
    }

    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (PieceColor::White, PieceType::King) => '♔',
            (PieceColor::White, PieceType::Queen) => '♕',
            (PieceColor::White, PieceType::Rook) => '♖',
            (PieceColor::White, PieceType::Knight) => '♘',
            (PieceColor::White, PieceType::Bishop) => '♗',
            (PieceColor::White, PieceType::Pawn) => '♙',
            (PieceColor::Black, PieceType::King) => '♚',
            (PieceColor::Black, PieceType::Queen) => '♛',
            (PieceColor::Black, PieceType::Rook) => '♜',
            (PieceColor::Black, PieceType::Knight) => '♞',
            (PieceColor::Black, PieceType::Bishop) => '♝',
            (PieceColor::Black, PieceType::Pawn) => '♟',
        }
    }
}

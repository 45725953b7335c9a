use std::fmt;
use crate::error::LayoutError;
use super::{Board, Grid, Piece, PieceColor, PieceType, BOARD_SIZE};

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

pub const STANDARD_DIAGRAM: &str = "\
rnbqkbnr
pppppppp
........
........
........
........
PPPPPPPP
RNBQKBNR";

/// Black on rows 0-1, White on rows 6-7.
pub fn standard() -> Grid {
    let mut grid: Grid = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for color in [PieceColor::White, PieceColor::Black] {
        let back = color.back_row() as usize;
        let pawns = color.pawn_start_row() as usize;
        for (col, kind) in BACK_RANK.iter().enumerate() {
            grid[back][col] = Some(Piece::new(*kind, color));
            grid[pawns][col] = Some(Piece::new(PieceType::Pawn, color));
        }
    }
    grid
}

/// Parse an 8x8 diagram, row 0 first: uppercase White, lowercase Black,
/// `.` empty. Blank lines and spaces are ignored.
pub fn parse_diagram(text: &str) -> Result<Grid, LayoutError> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|l| l.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(LayoutError::RowCount(rows.len()));
    }
    let mut grid: Grid = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for (row, cells) in rows.iter().enumerate() {
        if cells.len() != BOARD_SIZE as usize {
            return Err(LayoutError::RowWidth { row, width: cells.len() });
        }
        for (col, &c) in cells.iter().enumerate() {
            if c == '.' { continue; }
            let mut piece = Piece::from_letter(c).map_err(|source| LayoutError::Cell { row, source })?;
            // a pawn off its start row has already advanced
            if piece.kind == PieceType::Pawn && row as u8 != piece.color.pawn_start_row() {
                piece.has_moved = true;
            }
            grid[row][col] = Some(piece);
        }
    }
    Ok(grid)
}

pub fn render_grid(grid: &Grid) -> String {
    grid.iter()
        .map(|row| row.iter().map(|cell| cell.map_or('.', |p| p.letter())).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

impl Board {
    pub fn from_diagram(text: &str, current_turn: PieceColor) -> Result<Self, LayoutError> {
        Ok(Self::with_grid(parse_diagram(text)?, current_turn))
    }

    pub fn render(&self) -> String { render_grid(self.grid()) }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.grid().iter().enumerate() {
            write!(f, "{} ", BOARD_SIZE as usize - row)?;
            for cell in cells {
                write!(f, " {}", cell.map_or('·', |p| p.symbol()))?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Position;

    #[test]
    fn standard_matches_diagram() {
        assert_eq!(render_grid(&standard()), STANDARD_DIAGRAM);
        assert_eq!(parse_diagram(STANDARD_DIAGRAM).unwrap(), standard());
    }

    #[test]
    fn kings_on_e_file() {
        let b = Board::new();
        let wk = b.piece_at(Position::new(7, 4).unwrap()).unwrap();
        let bk = b.piece_at(Position::new(0, 4).unwrap()).unwrap();
        assert_eq!((wk.kind, wk.color), (PieceType::King, PieceColor::White));
        assert_eq!((bk.kind, bk.color), (PieceType::King, PieceColor::Black));
    }

    #[test]
    fn advanced_pawns_are_marked_moved() {
        let grid = parse_diagram(
            "....k...\n........\n........\n...P....\n........\n........\n....P...\n....K...",
        )
        .unwrap();
        assert!(grid[3][3].unwrap().has_moved);
        assert!(!grid[6][4].unwrap().has_moved);
    }

    #[test]
    fn bad_letters_and_row_counts_fail() {
        assert_eq!(parse_diagram("........\n"), Err(LayoutError::RowCount(1)));
        let g = parse_diagram("....k\n8\n8\n8\n8\n8\n8\n....K").err();
        assert_eq!(g, Some(LayoutError::RowWidth { row: 0, width: 5 }));
        let bad = STANDARD_DIAGRAM.replace("rnbqkbnr", "rnbqxbnr");
        assert!(matches!(parse_diagram(&bad), Err(LayoutError::Cell { row: 0, .. })));
    }
}

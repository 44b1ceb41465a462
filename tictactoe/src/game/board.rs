//! Board engine: the 3x3 grid and terminal-state evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Every line that wins the game, as cell indices.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Type alias for board positions, row-major from the top-left corner.
pub type CellIndex = usize;

/// The marker a player places on the board.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Symbol {
    X,
    O,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::X => "X",
            Self::O => "O",
        };
        write!(f, "{repr}")
    }
}

/// Why a placement was refused.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlacementError {
    OutOfRange,
    Occupied,
}

/// A 3x3 grid where each cell is either empty or holds a symbol.
///
/// Serializes as a flat array of nine entries, `null` for empty cells.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Board([Option<Symbol>; CELL_COUNT]);

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cell contents.
    pub fn from_cells(cells: [Option<Symbol>; CELL_COUNT]) -> Self {
        Self(cells)
    }

    pub fn cells(&self) -> &[Option<Symbol>; CELL_COUNT] {
        &self.0
    }

    pub fn get(&self, cell: CellIndex) -> Option<Symbol> {
        self.0.get(cell).copied().flatten()
    }

    pub fn is_empty_cell(&self, cell: CellIndex) -> bool {
        matches!(self.0.get(cell), Some(None))
    }

    /// Write `symbol` into an empty, in-range cell.
    pub fn place(&mut self, cell: CellIndex, symbol: Symbol) -> Result<(), PlacementError> {
        match self.0.get_mut(cell) {
            None => Err(PlacementError::OutOfRange),
            Some(Some(_)) => Err(PlacementError::Occupied),
            Some(slot) => {
                *slot = Some(symbol);
                Ok(())
            }
        }
    }

    pub fn filled_count(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.0.iter().filter(|cell| **cell == Some(symbol)).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() == CELL_COUNT
    }

    pub fn winner(&self) -> Option<Symbol> {
        evaluate_winner(self)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.0.chunks(3).enumerate() {
            if row_idx > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(symbol) => write!(f, "{symbol}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}

/// Return the symbol that fills any winning line, if one exists.
pub fn evaluate_winner(board: &Board) -> Option<Symbol> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let first = board.0[a]?;
        (board.0[b] == Some(first) && board.0[c] == Some(first)).then_some(first)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(pattern: &str) -> Board {
        let mut cells = [None; CELL_COUNT];
        for (idx, ch) in pattern.chars().filter(|c| !c.is_whitespace()).enumerate() {
            cells[idx] = match ch {
                'X' => Some(Symbol::X),
                'O' => Some(Symbol::O),
                _ => None,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_every_line_wins_for_both_symbols() {
        for symbol in [Symbol::X, Symbol::O] {
            for line in WINNING_LINES {
                let mut board = Board::new();
                for cell in line {
                    board.place(cell, symbol).unwrap();
                }
                assert_eq!(evaluate_winner(&board), Some(symbol), "line {line:?}");
            }
        }
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(evaluate_winner(&Board::new()), None);
    }

    #[test]
    fn test_full_board_without_line() {
        let board = board_from("XOX XOO OXX");
        assert!(board.is_full());
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_from("XXO ... ...");
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_range() {
        let mut board = Board::new();
        board.place(4, Symbol::X).unwrap();
        assert_eq!(board.place(4, Symbol::O), Err(PlacementError::Occupied));
        assert_eq!(board.place(9, Symbol::O), Err(PlacementError::OutOfRange));
        assert_eq!(board.get(4), Some(Symbol::X));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_board_serializes_as_flat_array() {
        let board = board_from("X.. .O. ...");
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(json, r#"["X",null,null,null,"O",null,null,null,null]"#);
    }

    #[test]
    fn test_display_renders_rows() {
        let board = board_from("X.. .O. ..X");
        assert_eq!(board.to_string(), "X..\n.O.\n..X");
    }
}

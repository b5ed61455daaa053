//! Game board representation and collision detection

use crate::piece::Piece;
use crate::shape::Shape;
use ratatui::style::Color;

/// Standard Tetris board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

const EMPTY_ROW: [Cell; BOARD_WIDTH] = [Cell::Empty; BOARD_WIDTH];

/// A cell on the board - either empty or filled with a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Grid stored as [row][col], row 0 is the top, row increases downward
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY_ROW; BOARD_HEIGHT],
        }
    }

    /// Get the cell at a position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        let row = row as usize;
        let col = col as usize;
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return None;
        }
        Some(self.cells[row][col])
    }

    /// Set a cell at a position
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        let row = row as usize;
        let col = col as usize;
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return false;
        }
        self.cells[row][col] = cell;
        true
    }

    /// Check whether `shape` placed with its top-left corner at (x, y) is legal.
    ///
    /// Every occupied cell must lie within the columns and above the floor.
    /// Cells above row 0 skip the occupancy check but not the column check.
    pub fn fits(&self, shape: &Shape, x: i32, y: i32) -> bool {
        shape.occupied().all(|(dr, dc)| {
            let col = x + dc;
            let row = y + dr;
            if col < 0 || col >= BOARD_WIDTH as i32 || row >= BOARD_HEIGHT as i32 {
                return false;
            }
            row < 0 || self.cells[row as usize][col as usize].is_empty()
        })
    }

    /// Copy a piece's cells onto the board in its color.
    /// Cells still above row 0 are dropped.
    pub fn lock(&mut self, piece: &Piece) {
        let cell = Cell::Filled(piece.piece_type.color());
        for (row, col) in piece.block_positions() {
            if row >= 0 {
                self.set(row, col, cell);
            }
        }
    }

    /// Remove a row; everything above it shifts down one and an empty row
    /// enters at the top. Panics if `row` is out of range.
    pub fn remove_row(&mut self, row: usize) {
        assert!(row < BOARD_HEIGHT, "row {row} out of range");
        self.cells[..=row].rotate_right(1);
        self.cells[0] = EMPTY_ROW;
    }

    /// Clear completed lines and return the number cleared.
    ///
    /// Scans bottom to top. After a removal the same index is examined again,
    /// since it now holds the row that used to sit above it.
    pub fn clear_lines(&mut self) -> usize {
        let mut lines_cleared = 0;
        let mut row = BOARD_HEIGHT;

        while row > 0 {
            if self.is_line_full(row - 1) {
                self.remove_row(row - 1);
                lines_cleared += 1;
            } else {
                row -= 1;
            }
        }

        lines_cleared
    }

    /// Check if a line is completely filled
    pub fn is_line_full(&self, row: usize) -> bool {
        self.cells[row].iter().all(|cell| cell.is_filled())
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.cells.iter()
    }
}

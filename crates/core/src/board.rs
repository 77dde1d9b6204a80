//! Board module - manages the game grid
//!
//! The board is a `rows x cols` grid where each cell is either empty or holds a
//! colored token. Cells live in a flat row-major `Vec` for cache locality.
//! Coordinates: `Pos { row, col }` with row 0 at the top and col 0 at the left.

use std::fmt;
use std::ops::Index;

use crate::config::BoardConfig;
use crate::error::{EngineError, Result};
use crate::types::{Cell, Color, Pos};

/// The game board
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an all-empty board
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        BoardConfig::validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// Build a board from nested rows (top row first).
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return Err(EngineError::InvalidDimensions {
                rows: height,
                cols: width,
            });
        }
        let mut board = Self::new(height, width)?;
        for (r, row) in rows.into_iter().enumerate() {
            let start = r * width;
            board.cells[start..start + width].copy_from_slice(&row);
        }
        Ok(board)
    }

    /// Build a board from a text pattern, one string per row.
    ///
    /// `.` is an empty cell; letters are color initials (`R`ed, `G`reen,
    /// `Y`ellow, `B`lue, `M`agenta, `C`yan, `O`range, `W`hite). Whitespace is
    /// ignored. Any other character is rejected with
    /// [`EngineError::InvalidPattern`].
    ///
    /// ```
    /// use tui_match3_core::Board;
    /// use tui_match3_core::types::{Cell, Color, Pos};
    ///
    /// let board = Board::from_pattern(&["RGB", "Y.M", "RRG"]).unwrap();
    /// assert_eq!(board.get(Pos::new(0, 2)), Some(Cell::Token(Color::Blue)));
    /// assert_eq!(board.get(Pos::new(1, 1)), Some(Cell::Empty));
    /// ```
    pub fn from_pattern(pattern: &[&str]) -> Result<Self> {
        let mut rows = Vec::with_capacity(pattern.len());
        for line in pattern {
            let mut row = Vec::new();
            for ch in line.chars().filter(|c| !c.is_whitespace()) {
                let cell = if ch == '.' {
                    Cell::Empty
                } else {
                    let mut buf = [0u8; 4];
                    match Color::from_str(ch.encode_utf8(&mut buf)) {
                        Some(color) => Cell::Token(color),
                        None => return Err(EngineError::InvalidPattern { ch }),
                    }
                };
                row.push(cell);
            }
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn flat_index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        Some(pos.row * self.cols + pos.col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if position lies on the board
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get cell at position, `None` if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.flat_index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at position. Returns false if out of bounds.
    pub fn set(&mut self, pos: Pos, cell: Cell) -> bool {
        match self.flat_index(pos) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Bounds-checked query for presentation layers
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell> {
        self.get(Pos::new(row, col))
            .ok_or(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Color of the token at `pos`; `None` for empty or out-of-bounds cells
    #[inline]
    pub fn color_at(&self, pos: Pos) -> Option<Color> {
        self.get(pos).and_then(|cell| cell.color())
    }

    /// Exchange two cells. Returns false (and changes nothing) if either is off the board.
    pub(crate) fn swap_cells(&mut self, a: Pos, b: Pos) -> bool {
        match (self.flat_index(a), self.flat_index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        let rows = if col < cols { self.rows } else { 0 };
        (0..rows).map(move |row| self.cells[row * cols + col])
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Pos::new(row, col)))
    }

    /// Number of cells holding a token
    pub fn token_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_token()).count()
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    /// Panics when `pos` is outside the board; out-of-bounds access is a caller bug.
    fn index(&self, pos: Pos) -> &Cell {
        match self.flat_index(pos) {
            Some(idx) => &self.cells[idx],
            None => panic!(
                "position ({}, {}) is outside the {}x{} board",
                pos.row, pos.col, self.rows, self.cols
            ),
        }
    }
}

impl fmt::Display for Board {
    /// Same notation as [`Board::from_pattern`], one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Token(color) => color
                        .as_str()
                        .chars()
                        .next()
                        .map_or('?', |c| c.to_ascii_uppercase()),
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

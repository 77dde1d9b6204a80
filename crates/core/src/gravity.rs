//! Gravity compaction.
//!
//! Each column is compacted independently: tokens slide down over empty
//! cells keeping their relative order, and the freed cells end up at the top.
//! Uses a stack buffer per column, so compaction does not allocate.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::{Cell, Color, Pos, MAX_BOARD_DIM};

/// Compact every column. Returns how many tokens changed position.
pub fn compact(board: &mut Board) -> usize {
    (0..board.cols())
        .map(|col| compact_column(board, col))
        .sum()
}

/// Compact a single column. Returns how many tokens changed position.
pub fn compact_column(board: &mut Board, col: usize) -> usize {
    let rows = board.rows();
    if col >= board.cols() {
        return 0;
    }

    // Tokens bottom to top, paired with their original row.
    let mut tokens: ArrayVec<(usize, Color), { MAX_BOARD_DIM as usize }> = ArrayVec::new();
    for row in (0..rows).rev() {
        if let Some(color) = board.color_at(Pos::new(row, col)) {
            tokens.push((row, color));
        }
    }

    let mut moved = 0;
    let mut write_row = rows;
    for &(from_row, color) in &tokens {
        write_row -= 1;
        if write_row != from_row {
            moved += 1;
        }
        board.set(Pos::new(write_row, col), Cell::Token(color));
    }
    for row in 0..write_row {
        board.set(Pos::new(row, col), Cell::Empty);
    }
    moved
}

/// True when every column has its empty cells above all of its tokens.
pub fn is_compacted(board: &Board) -> bool {
    (0..board.cols()).all(|col| {
        let mut seen_token = false;
        for cell in board.column(col) {
            match cell {
                Cell::Token(_) => seen_token = true,
                Cell::Empty if seen_token => return false,
                Cell::Empty => {}
            }
        }
        true
    })
}

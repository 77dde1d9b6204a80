//! Board generation without latent matches.
//!
//! Cells are filled in row-major order. Each cell redraws a uniform random
//! palette color until the color would not complete a run of three with the
//! two cells to its left or the two cells above it. Those neighbours are
//! always final by the time the cell is drawn, so one forward pass is enough
//! to guarantee that the finished board holds no match.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::Result;
use crate::types::{Cell, Color, Pos};

/// Generate a board for `config` using `rng`.
///
/// Fails if the configuration is invalid, in particular for palettes below
/// three colors where a valid fill is not guaranteed.
pub fn generate<R: Rng + ?Sized>(config: &BoardConfig, rng: &mut R) -> Result<Board> {
    config.validate()?;

    let mut board = Board::new(config.rows, config.cols)?;
    let palette = config.palette();
    let mut redraws = 0usize;

    for row in 0..config.rows {
        for col in 0..config.cols {
            let pos = Pos::new(row, col);
            let mut color = palette[rng.random_range(0..palette.len())];
            while !color_is_allowed(&board, pos, color) {
                color = palette[rng.random_range(0..palette.len())];
                redraws += 1;
            }
            board.set(pos, Cell::Token(color));
        }
    }

    debug!(
        "generated {}x{} board with {} colors ({} redraws)",
        config.rows,
        config.cols,
        palette.len(),
        redraws
    );
    Ok(board)
}

/// Check if `color` may be placed at `pos` given the cells already filled.
///
/// Only the left pair (same row) and the upper pair (same column) are
/// examined; edge rows and columns with fewer than two such neighbours skip
/// the corresponding check.
pub fn color_is_allowed(board: &Board, pos: Pos, color: Color) -> bool {
    let same = |p: Pos| board.color_at(p) == Some(color);

    if pos.col >= 2
        && same(Pos::new(pos.row, pos.col - 1))
        && same(Pos::new(pos.row, pos.col - 2))
    {
        return false;
    }
    if pos.row >= 2
        && same(Pos::new(pos.row - 1, pos.col))
        && same(Pos::new(pos.row - 2, pos.col))
    {
        return false;
    }
    true
}

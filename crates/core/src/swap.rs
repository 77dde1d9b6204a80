//! Swap validation and application.

use crate::board::Board;
use crate::error::InvalidMove;
use crate::types::Pos;

/// Check that `a` and `b` may be swapped.
///
/// Both positions must be on the board, orthogonally adjacent, and hold tokens.
pub fn validate_swap(board: &Board, a: Pos, b: Pos) -> Result<(), InvalidMove> {
    if !board.contains(a) || !board.contains(b) {
        return Err(InvalidMove::OutOfRange);
    }
    if !a.is_adjacent(b) {
        return Err(InvalidMove::NotAdjacent);
    }
    if board.color_at(a).is_none() || board.color_at(b).is_none() {
        return Err(InvalidMove::EmptyCell);
    }
    Ok(())
}

/// Exchange the tokens at `a` and `b`.
///
/// On error the board is left untouched. A valid swap is kept even if it
/// produces no match; the caller runs the cascade afterwards.
pub fn swap(board: &mut Board, a: Pos, b: Pos) -> Result<(), InvalidMove> {
    validate_swap(board, a, b)?;
    board.swap_cells(a, b);
    Ok(())
}

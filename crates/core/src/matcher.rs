//! Match detection.
//!
//! A token belongs to a run of three or more iff it has two same-colored
//! neighbours in one of six fixed windows around it: two below, two to the
//! right, two above, two to the left, one on each side horizontally, or one
//! on each side vertically. Testing those windows per cell gives the same
//! membership as scanning maximal runs, without building the runs.

use crate::board::Board;
use crate::types::{Color, Pos, MATCH_LEN};

/// Offsets (d_row, d_col) of the partner cells for each window
const WINDOWS: [[(isize, isize); MATCH_LEN - 1]; 6] = [
    [(1, 0), (2, 0)],
    [(0, 1), (0, 2)],
    [(-1, 0), (-2, 0)],
    [(0, -1), (0, -2)],
    [(0, -1), (0, 1)],
    [(-1, 0), (1, 0)],
];

/// Positions of every matched token, in row-major order without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: Vec<Pos>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.positions.binary_search(&pos).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions.iter().copied()
    }

    pub fn as_slice(&self) -> &[Pos] {
        &self.positions
    }

    pub fn into_vec(self) -> Vec<Pos> {
        self.positions
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

/// Find every token that is part of a horizontal or vertical run of three or more.
pub fn find_matches(board: &Board) -> MatchSet {
    let mut positions = Vec::new();
    // Row-major scan keeps the output sorted; each cell is pushed at most once.
    for pos in board.positions() {
        if is_part_of_match(board, pos) {
            positions.push(pos);
        }
    }
    MatchSet { positions }
}

/// True if the token at `pos` completes a run of three in any window.
///
/// Empty and out-of-bounds cells never match.
pub fn is_part_of_match(board: &Board, pos: Pos) -> bool {
    let Some(color) = board.color_at(pos) else {
        return false;
    };
    WINDOWS.iter().any(|window| {
        window
            .iter()
            .all(|&(dr, dc)| partner_color(board, pos, dr, dc) == Some(color))
    })
}

fn partner_color(board: &Board, pos: Pos, dr: isize, dc: isize) -> Option<Color> {
    let row = pos.row.checked_add_signed(dr)?;
    let col = pos.col.checked_add_signed(dc)?;
    board.color_at(Pos::new(row, col))
}

//! Cascade loop - detect, remove, compact, repeat until quiescent.
//!
//! [`Cascade`] is a small state machine so callers can stop at each phase
//! boundary (after removal, after compaction) and present the intermediate
//! board. [`run_cascade`] drives it to completion in one call.
//!
//! Termination: every pass that finds matches removes at least three tokens,
//! so a `rows x cols` board settles after at most `rows * cols` detection
//! passes.

use log::debug;

use crate::board::Board;
use crate::gravity::compact;
use crate::matcher::find_matches;
use crate::types::{Cell, Pos};

/// Outcome of one [`Cascade::step`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeStep {
    /// Matched tokens were set to `Empty`
    Removed { count: usize, positions: Vec<Pos> },
    /// Columns were compacted; `moved` tokens changed position
    Compacted { moved: usize },
    /// A detection pass found nothing; the board is quiescent
    Settled { removed: usize, passes: usize },
}

impl CascadeStep {
    /// Cells removed by this step (zero for non-removal steps)
    pub fn removed(&self) -> usize {
        match self {
            CascadeStep::Removed { count, .. } => *count,
            _ => 0,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, CascadeStep::Settled { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Detect,
    Compact,
    Done,
}

/// Stepwise cascade over a board.
#[derive(Debug, Clone)]
pub struct Cascade {
    phase: Phase,
    removed: usize,
    passes: usize,
}

impl Cascade {
    pub fn new() -> Self {
        Self {
            phase: Phase::Detect,
            removed: 0,
            passes: 0,
        }
    }

    /// Advance one phase.
    ///
    /// Once settled, further calls keep returning the same `Settled` step.
    pub fn step(&mut self, board: &mut Board) -> CascadeStep {
        match self.phase {
            Phase::Detect => {
                self.passes += 1;
                debug_assert!(
                    self.passes <= board.rows() * board.cols(),
                    "cascade exceeded its pass bound"
                );
                let matches = find_matches(board);
                if matches.is_empty() {
                    debug!(
                        "cascade settled after {} passes, {} removed",
                        self.passes, self.removed
                    );
                    self.phase = Phase::Done;
                    return self.settled();
                }

                let positions = matches.into_vec();
                for &pos in &positions {
                    board.set(pos, Cell::Empty);
                }
                let count = positions.len();
                self.removed += count;
                self.phase = Phase::Compact;
                debug!("cascade pass {}: removed {}", self.passes, count);
                CascadeStep::Removed { count, positions }
            }
            Phase::Compact => {
                let moved = compact(board);
                self.phase = Phase::Detect;
                CascadeStep::Compacted { moved }
            }
            Phase::Done => self.settled(),
        }
    }

    /// Total cells removed so far
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Detection passes run so far, including the final empty one
    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Done
    }

    fn settled(&self) -> CascadeStep {
        CascadeStep::Settled {
            removed: self.removed,
            passes: self.passes,
        }
    }
}

impl Default for Cascade {
    fn default() -> Self {
        Self::new()
    }
}

/// Totals of a completed cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    pub removed: usize,
    pub passes: usize,
}

/// Run the cascade to quiescence and report what it removed.
pub fn run_cascade(board: &mut Board) -> CascadeReport {
    let mut cascade = Cascade::new();
    loop {
        if let CascadeStep::Settled { removed, passes } = cascade.step(board) {
            return CascadeReport { removed, passes };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gravity::is_compacted;

    #[test]
    fn quiet_board_settles_in_one_pass() {
        let mut board = Board::from_pattern(&["RGB", "GBR", "BRG"]).unwrap();
        let before = board.clone();
        let report = run_cascade(&mut board);
        assert_eq!(report, CascadeReport { removed: 0, passes: 1 });
        assert_eq!(board, before);
    }

    #[test]
    fn steps_alternate_remove_and_compact() {
        let mut board = Board::from_pattern(&["GBY", "RRR", "BYG"]).unwrap();
        let mut cascade = Cascade::new();

        match cascade.step(&mut board) {
            CascadeStep::Removed { count, positions } => {
                assert_eq!(count, 3);
                assert_eq!(positions, vec![Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]);
            }
            other => panic!("expected removal, got {other:?}"),
        }
        assert_eq!(board.to_string(), "GBY\n...\nBYG");

        assert_eq!(cascade.step(&mut board), CascadeStep::Compacted { moved: 3 });
        assert_eq!(board.to_string(), "...\nGBY\nBYG");

        assert_eq!(
            cascade.step(&mut board),
            CascadeStep::Settled { removed: 3, passes: 2 }
        );
        assert!(cascade.is_settled());
        // Stays settled.
        assert!(cascade.step(&mut board).is_settled());
        assert_eq!(cascade.passes(), 2);
    }

    #[test]
    fn parallel_runs_clear_in_one_pass() {
        let mut board = Board::from_pattern(&["RRRY", "GGGB", "BYBY", "YBYB"]).unwrap();
        let report = run_cascade(&mut board);
        assert_eq!(report, CascadeReport { removed: 6, passes: 2 });
        assert_eq!(board.to_string(), "...Y\n...B\nBYBY\nYBYB");
    }

    #[test]
    fn second_wave_after_drop() {
        // Clearing the greens drops the two reds in column 0 onto the third.
        let mut board = Board::from_pattern(&["RBYB", "RYBY", "GGGB", "RBYY"]).unwrap();
        let mut cascade = Cascade::new();

        assert_eq!(cascade.step(&mut board).removed(), 3);
        assert_eq!(cascade.step(&mut board), CascadeStep::Compacted { moved: 6 });
        assert_eq!(board.to_string(), "...B\nRBYY\nRYBB\nRBYY");

        match cascade.step(&mut board) {
            CascadeStep::Removed { positions, .. } => {
                assert_eq!(positions, vec![Pos::new(1, 0), Pos::new(2, 0), Pos::new(3, 0)]);
            }
            other => panic!("expected second removal, got {other:?}"),
        }
        cascade.step(&mut board);
        assert_eq!(
            cascade.step(&mut board),
            CascadeStep::Settled { removed: 6, passes: 3 }
        );
        assert_eq!(board.to_string(), "...B\n.BYY\n.YBB\n.BYY");
        assert!(is_compacted(&board));
    }
}

//! Game session - one board, its RNG, and the running score.
//!
//! The session is the engine's public surface for presentation layers:
//!
//! - [`GameSession::request_swap`] validates, swaps and cascades in one call.
//! - [`GameSession::begin_swap`] + [`GameSession::step`] expose the same work
//!   one phase at a time for paced playback. While a cascade is in flight the
//!   session is busy and refuses new swaps.
//!
//! Selection state (which cells the player picked) belongs to the caller.

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::cascade::{Cascade, CascadeReport, CascadeStep};
use crate::config::BoardConfig;
use crate::error::{InvalidMove, Result};
use crate::generator::generate;
use crate::snapshot::{fnv1a64, GameSnapshot};
use crate::swap::swap;
use crate::types::{Cell, Pos};

/// Result of [`GameSession::request_swap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwapOutcome {
    pub accepted: bool,
    /// Cells removed across every cascade pass
    pub removed: usize,
    /// Detection passes, including the final empty one
    pub passes: usize,
    /// Why the swap was refused, when `accepted` is false
    pub rejection: Option<InvalidMove>,
}

impl SwapOutcome {
    fn rejected(reason: InvalidMove) -> Self {
        Self {
            rejection: Some(reason),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: BoardConfig,
    board: Board,
    rng: StdRng,
    seed: u64,
    score: u32,
    moves: u32,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    /// Cascade started by `begin_swap` and not yet settled
    cascade: Option<Cascade>,
}

impl GameSession {
    /// Create a session with a freshly generated board.
    ///
    /// Invalid configurations (including palettes below three colors) are
    /// rejected here.
    pub fn new(config: BoardConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let board = generate(&config, &mut rng)?;
        debug!(
            "new session {}x{} colors={} seed={}",
            config.rows, config.cols, config.palette_size, seed
        );
        Ok(Self {
            config,
            board,
            rng,
            seed,
            score: 0,
            moves: 0,
            episode_id: 0,
            cascade: None,
        })
    }

    /// Regenerate the board and reset score and move count.
    ///
    /// The RNG stream continues, so each restart deals a new board. Any
    /// cascade in flight is dropped.
    pub fn restart(&mut self) -> Result<()> {
        self.board = generate(&self.config, &mut self.rng)?;
        self.score = 0;
        self.moves = 0;
        self.cascade = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!("restart: episode {}", self.episode_id);
        Ok(())
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for setting up scenarios
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// True while a paced cascade has not settled
    pub fn is_busy(&self) -> bool {
        self.cascade.is_some()
    }

    /// Bounds-checked cell query
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell> {
        self.board.cell_at(row, col)
    }

    /// Validate, swap and run the full cascade.
    ///
    /// A refused swap reports `accepted = false` and leaves the board as it was.
    pub fn request_swap(&mut self, a: Pos, b: Pos) -> SwapOutcome {
        if let Err(reason) = self.begin_swap(a, b) {
            return SwapOutcome::rejected(reason);
        }
        let report = self.finish_cascade().unwrap_or_default();
        SwapOutcome {
            accepted: true,
            removed: report.removed,
            passes: report.passes,
            rejection: None,
        }
    }

    /// Validate and apply a swap, leaving its cascade pending for [`GameSession::step`].
    pub fn begin_swap(&mut self, a: Pos, b: Pos) -> std::result::Result<(), InvalidMove> {
        if self.is_busy() {
            return Err(InvalidMove::CascadeInProgress);
        }
        swap(&mut self.board, a, b)?;
        self.moves = self.moves.saturating_add(1);
        self.cascade = Some(Cascade::new());
        debug!("swap {:?} <-> {:?} (move {})", a, b, self.moves);
        Ok(())
    }

    /// Advance the pending cascade by one phase.
    ///
    /// Returns `None` when nothing is pending. The `Settled` step clears the
    /// pending cascade.
    pub fn step(&mut self) -> Option<CascadeStep> {
        let cascade = self.cascade.as_mut()?;
        let step = cascade.step(&mut self.board);
        match &step {
            CascadeStep::Removed { count, .. } => {
                self.score = self.score.saturating_add(*count as u32);
            }
            CascadeStep::Settled { .. } => self.cascade = None,
            CascadeStep::Compacted { .. } => {}
        }
        Some(step)
    }

    /// Drive the pending cascade to the end.
    pub fn finish_cascade(&mut self) -> Option<CascadeReport> {
        loop {
            match self.step()? {
                CascadeStep::Settled { removed, passes } => {
                    return Some(CascadeReport { removed, passes });
                }
                _ => continue,
            }
        }
    }

    /// Fill `out` with the current state, reusing its buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.board.clear();
        out.board
            .extend(self.board.cells().iter().map(|cell| cell.to_u8()));
        out.board_hash = fnv1a64(&out.board);
        out.score = self.score;
        out.moves = self.moves;
        out.busy = self.is_busy();
        out.episode_id = self.episode_id;
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::matcher::find_matches;
    use crate::types::Color;

    fn session() -> GameSession {
        GameSession::new(BoardConfig::default(), 12345).unwrap()
    }

    #[test]
    fn test_new_session() {
        let s = session();
        assert_eq!(s.score(), 0);
        assert_eq!(s.moves(), 0);
        assert!(!s.is_busy());
        assert!(find_matches(s.board()).is_empty());
        assert_eq!(s.board().token_count(), 100);
    }

    #[test]
    fn test_same_seed_same_board() {
        assert_eq!(session().board(), session().board());
    }

    #[test]
    fn test_rejects_unsolvable_palette() {
        let err = GameSession::new(BoardConfig::new(10, 10, 2), 1).unwrap_err();
        assert_eq!(err, EngineError::UnsolvableGeneration { palette_size: 2 });
    }

    #[test]
    fn test_restart_resets_score_and_bumps_episode() {
        let mut s = session();
        let first = s.board().clone();
        s.board_mut().set(Pos::new(0, 0), Cell::Empty);
        s.score = 9;
        s.restart().unwrap();
        assert_eq!(s.score(), 0);
        assert_eq!(s.episode_id(), 1);
        assert_ne!(s.board(), &first);
        assert!(find_matches(s.board()).is_empty());
    }

    #[test]
    fn test_begin_swap_marks_busy_until_settled() {
        let mut s = session();
        *s.board_mut() = Board::from_pattern(&["RGR", "GRG", "BRB"]).unwrap();
        s.begin_swap(Pos::new(0, 1), Pos::new(1, 1)).unwrap();
        assert!(s.is_busy());
        assert_eq!(
            s.begin_swap(Pos::new(2, 0), Pos::new(2, 1)),
            Err(InvalidMove::CascadeInProgress)
        );
        let report = s.finish_cascade().unwrap();
        assert!(!s.is_busy());
        assert_eq!(report.removed, 6);
        assert_eq!(s.score(), 6);
        assert!(s.step().is_none());
    }

    #[test]
    fn test_restart_drops_cascade_in_flight() {
        let mut s = session();
        *s.board_mut() = Board::from_pattern(&["RGR", "GRG", "BRB"]).unwrap();
        s.begin_swap(Pos::new(0, 1), Pos::new(1, 1)).unwrap();
        assert_eq!(s.step().map(|step| step.removed()), Some(6));
        assert!(s.is_busy());

        s.restart().unwrap();

        assert!(!s.is_busy());
        assert_eq!(s.step(), None);
        assert_eq!(s.score(), 0);
        assert_eq!(s.moves(), 0);
        assert_eq!(s.board().token_count(), 100);
        assert!(find_matches(s.board()).is_empty());
    }

    #[test]
    fn test_rejected_swap_reports_its_reason() {
        let mut s = session();
        let cases = [
            (Pos::new(0, 0), Pos::new(0, 2), InvalidMove::NotAdjacent),
            (Pos::new(9, 9), Pos::new(9, 10), InvalidMove::OutOfRange),
        ];
        for (a, b, reason) in cases {
            let outcome = s.request_swap(a, b);
            assert!(!outcome.accepted);
            assert_eq!(outcome.rejection, Some(reason));
        }

        *s.board_mut() = Board::from_pattern(&["RGR", "GRG", "BRB"]).unwrap();
        s.begin_swap(Pos::new(0, 1), Pos::new(1, 1)).unwrap();
        let outcome = s.request_swap(Pos::new(2, 0), Pos::new(2, 1));
        assert_eq!(outcome.rejection, Some(InvalidMove::CascadeInProgress));
    }

    #[test]
    fn test_non_matching_swap_is_kept() {
        let mut s = session();
        *s.board_mut() = Board::from_pattern(&["RGB", "GBR", "BRG"]).unwrap();
        let outcome = s.request_swap(Pos::new(0, 0), Pos::new(0, 1));
        assert!(outcome.accepted);
        assert_eq!(outcome.removed, 0);
        assert_eq!(s.board().to_string(), "GRB\nGBR\nBRG");
        assert_eq!(s.moves(), 1);
    }

    #[test]
    fn test_cell_at_bounds() {
        let s = session();
        assert!(s.cell_at(9, 9).unwrap().is_token());
        assert!(matches!(
            s.cell_at(10, 0),
            Err(EngineError::OutOfBounds { row: 10, col: 0, .. })
        ));
    }

    #[test]
    fn test_snapshot_mirrors_session() {
        let mut s = session();
        s.board_mut().set(Pos::new(0, 0), Cell::Token(Color::Red));
        let snap = s.snapshot();
        assert_eq!(snap.cell(0, 0), Some(Cell::Token(Color::Red)));
        assert_eq!(snap.board_hash, fnv1a64(&snap.board));
        assert_eq!(snap.seed, 12345);
        assert!(snap.playable());
    }
}

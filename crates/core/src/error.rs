//! Engine error taxonomy.

use thiserror::Error;

use crate::types::{MAX_BOARD_DIM, MIN_BOARD_DIM};

/// Why a swap request was turned down.
///
/// All of these leave the board untouched and are safe to report to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("position outside the board")]
    OutOfRange,
    #[error("positions are not adjacent")]
    NotAdjacent,
    /// One of the cells has already been cleared
    #[error("cannot swap an empty cell")]
    EmptyCell,
    /// A previous swap is still cascading
    #[error("board is still settling")]
    CascadeInProgress,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A coordinate outside `[0, rows) x [0, cols)`. Indicates a caller bug.
    #[error("position ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid move: {0}")]
    InvalidMove(InvalidMove),

    #[error("cannot generate a board without latent matches from {palette_size} colors (need at least 3)")]
    UnsolvableGeneration { palette_size: usize },

    #[error("palette of {palette_size} colors exceeds the {max} available")]
    PaletteTooLarge { palette_size: usize, max: usize },

    #[error(
        "board dimensions {rows}x{cols} must each be within {}..={}",
        MIN_BOARD_DIM,
        MAX_BOARD_DIM
    )]
    InvalidDimensions { rows: usize, cols: usize },

    /// A board pattern holds something other than `.` or a color initial.
    #[error("unknown board pattern character {ch:?}")]
    InvalidPattern { ch: char },
}

impl From<InvalidMove> for EngineError {
    fn from(reason: InvalidMove) -> Self {
        EngineError::InvalidMove(reason)
    }
}

impl EngineError {
    /// True for errors the player can recover from by entering another move
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::InvalidMove(_))
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

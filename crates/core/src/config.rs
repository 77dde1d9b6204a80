//! Board configuration.

use crate::error::{EngineError, Result};
use crate::types::{
    Color, BOARD_COLS, BOARD_ROWS, MAX_BOARD_DIM, MIN_BOARD_DIM, MIN_PALETTE_SIZE, PALETTE_SIZE,
};

/// Size of the grid and the number of colors in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    pub palette_size: usize,
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, palette_size: usize) -> Self {
        Self {
            rows,
            cols,
            palette_size,
        }
    }

    /// Check the configuration before any board is built.
    ///
    /// A palette below three colors is rejected here instead of letting the
    /// generator spin on a board it cannot fill.
    pub fn validate(&self) -> Result<()> {
        Self::validate_dimensions(self.rows, self.cols)?;
        if self.palette_size < MIN_PALETTE_SIZE as usize {
            return Err(EngineError::UnsolvableGeneration {
                palette_size: self.palette_size,
            });
        }
        if self.palette_size > Color::ALL.len() {
            return Err(EngineError::PaletteTooLarge {
                palette_size: self.palette_size,
                max: Color::ALL.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
        let range = MIN_BOARD_DIM as usize..=MAX_BOARD_DIM as usize;
        if !range.contains(&rows) || !range.contains(&cols) {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    /// Colors in play, in palette order
    pub fn palette(&self) -> &'static [Color] {
        &Color::ALL[..self.palette_size.min(Color::ALL.len())]
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(
            BOARD_ROWS as usize,
            BOARD_COLS as usize,
            PALETTE_SIZE as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_board() {
        let config = BoardConfig::default();
        assert_eq!((config.rows, config.cols, config.palette_size), (10, 10, 5));
        assert!(config.validate().is_ok());
        assert_eq!(
            config.palette(),
            &[
                Color::Red,
                Color::Green,
                Color::Yellow,
                Color::Blue,
                Color::Magenta
            ]
        );
    }

    #[test]
    fn small_palette_is_unsolvable() {
        let config = BoardConfig::new(10, 10, 2);
        assert_eq!(
            config.validate(),
            Err(EngineError::UnsolvableGeneration { palette_size: 2 })
        );
    }

    #[test]
    fn oversized_palette_rejected() {
        let config = BoardConfig::new(10, 10, 9);
        assert_eq!(
            config.validate(),
            Err(EngineError::PaletteTooLarge {
                palette_size: 9,
                max: 8
            })
        );
    }

    #[test]
    fn dimensions_limited_to_letter_range() {
        assert!(BoardConfig::new(3, 26, 3).validate().is_ok());
        assert!(BoardConfig::new(2, 10, 5).validate().is_err());
        assert!(BoardConfig::new(10, 27, 5).validate().is_err());
    }
}

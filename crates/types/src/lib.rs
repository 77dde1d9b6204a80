//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The reference board is 10x10:
//!
//! - **Rows**: 10 (indexed 0-9, row 0 at the top)
//! - **Columns**: 10 (indexed 0-9, column 0 at the left)
//! - **Palette**: 5 colors (red, green, yellow, blue, magenta)
//!
//! Dimensions are configurable between [`MIN_BOARD_DIM`] and [`MAX_BOARD_DIM`].
//! The upper bound comes from coordinate entry: each axis is addressed with a
//! single letter starting at `A`.
//!
//! # Cascade Pacing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Main loop timestep (~60 FPS) |
//! | `REMOVE_DELAY_MS` | 3000 | Pause between removal and compaction |
//! | `DROP_DELAY_MS` | 1500 | Pause between compaction and the next detection |
//!
//! # Examples
//!
//! ```
//! use tui_match3_types::{Cell, Color, Pos, BOARD_COLS, BOARD_ROWS};
//!
//! let cell = Cell::Token(Color::Red);
//! assert_eq!(cell.color(), Some(Color::Red));
//! assert!(Cell::Empty.is_empty());
//!
//! assert_eq!(Color::from_str("blue"), Some(Color::Blue));
//! assert!(Pos::new(0, 0).is_adjacent(Pos::new(0, 1)));
//!
//! assert_eq!(BOARD_ROWS, 10);
//! assert_eq!(BOARD_COLS, 10);
//! ```

/// Default number of rows
pub const BOARD_ROWS: u8 = 10;

/// Default number of columns
pub const BOARD_COLS: u8 = 10;

/// Smallest board edge that can hold a run of three
pub const MIN_BOARD_DIM: u8 = 3;

/// Largest board edge addressable with a single letter (`A`..=`Z`)
pub const MAX_BOARD_DIM: u8 = 26;

/// Default number of token colors in play
pub const PALETTE_SIZE: u8 = 5;

/// Fewest colors the generator can work with.
///
/// Each cell has at most two forbidden colors (one from the left pair, one
/// from the pair above), so three colors always leave a valid choice.
pub const MIN_PALETTE_SIZE: u8 = 3;

/// Minimum run length that counts as a match
pub const MATCH_LEN: usize = 3;

/// Main loop timestep in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Pause after matched tokens are removed, before they are compacted
pub const REMOVE_DELAY_MS: u32 = 3000;

/// Pause after compaction, before the next detection pass
pub const DROP_DELAY_MS: u32 = REMOVE_DELAY_MS / 2;

/// Token colors.
///
/// A session plays with the first `palette_size` entries of [`Color::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Orange,
    White,
}

impl Color {
    /// Every color, in palette order
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::Orange,
        Color::White,
    ];

    /// Palette color at `index`, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_match3_types::Color;
    ///
    /// assert_eq!(Color::from_index(0), Some(Color::Red));
    /// assert_eq!(Color::from_index(4), Some(Color::Magenta));
    /// assert_eq!(Color::from_index(8), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this color in [`Color::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Color::Red => 0,
            Color::Green => 1,
            Color::Yellow => 2,
            Color::Blue => 3,
            Color::Magenta => 4,
            Color::Cyan => 5,
            Color::Orange => 6,
            Color::White => 7,
        }
    }

    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" | "r" => Some(Color::Red),
            "green" | "g" => Some(Color::Green),
            "yellow" | "y" => Some(Color::Yellow),
            "blue" | "b" => Some(Color::Blue),
            "magenta" | "m" => Some(Color::Magenta),
            "cyan" | "c" => Some(Color::Cyan),
            "orange" | "o" => Some(Color::Orange),
            "white" | "w" => Some(Color::White),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::Orange => "orange",
            Color::White => "white",
        }
    }
}

/// A cell on the board.
///
/// `Empty` marks a vacated cell. It is a value of its own and never matches,
/// even against another `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Token(Color),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Cell::Token(_))
    }

    /// Token color, `None` for `Empty`
    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Token(color) => Some(*color),
        }
    }

    /// Byte encoding used by snapshots: 0 = empty, 1.. = palette index + 1
    pub fn to_u8(&self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Token(color) => color.index() as u8 + 1,
        }
    }

    /// Inverse of [`Cell::to_u8`]
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Cell::Empty),
            n => Color::from_index(n as usize - 1).map(Cell::Token),
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Token(color)
    }
}

/// A board coordinate: `row` counts down from the top, `col` right from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two positions
    pub fn distance(&self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when `other` shares a row or column and is exactly one step away
    pub fn is_adjacent(&self, other: Pos) -> bool {
        self.distance(other) == 1
    }

    /// The neighbour one step along `axis` (right for horizontal, down for vertical).
    ///
    /// No bounds check; callers validate against the board.
    pub fn step(&self, axis: Axis) -> Pos {
        match axis {
            Axis::Horizontal => Pos::new(self.row, self.col + 1),
            Axis::Vertical => Pos::new(self.row + 1, self.col),
        }
    }
}

/// Swap orientation chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Swap with the token to the right
    #[default]
    Horizontal,
    /// Swap with the token below
    Vertical,
}

impl Axis {
    pub fn toggle(&self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// Player commands delivered to the game driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Swap the token at `first` with its neighbour along `axis`.
    ///
    /// `first` is `None` when the entered coordinates did not parse; the
    /// driver reports it as invalid input.
    Move { first: Option<Pos>, axis: Axis },
    /// Regenerate the board and reset score and clock
    Restart,
}

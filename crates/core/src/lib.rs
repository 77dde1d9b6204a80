//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the match-3 board engine. It has **no dependencies** on
//! terminal I/O, timers or input handling:
//!
//! - **Deterministic**: the RNG is an explicit, seeded session field
//! - **Synchronous**: every operation runs to completion on the calling thread
//! - **Steppable**: cascades can be advanced one phase at a time for animation
//!
//! # Module Structure
//!
//! - [`board`]: flat `rows x cols` grid of [`Cell`](types::Cell)s
//! - [`generator`]: board generation with no pre-existing matches
//! - [`matcher`]: detection of runs of three or more
//! - [`swap`]: swap validation and application
//! - [`gravity`]: stable per-column compaction
//! - [`cascade`]: detect / remove / compact loop to quiescence
//! - [`coords`]: single-letter coordinate parsing
//! - [`session`]: one game: board, RNG, score, paced cascade
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - The player swaps two orthogonally adjacent tokens. Swaps involving an
//!   empty cell are refused. A swap is kept even if it matches nothing.
//! - Every token in a horizontal or vertical run of three or more is removed,
//!   scoring one point per token.
//! - Tokens fall to fill the gaps; new runs formed by the fall are removed in
//!   turn until the board is quiet. Removed cells are never refilled.
//!
//! # Example
//!
//! ```
//! use tui_match3_core::{BoardConfig, GameSession};
//! use tui_match3_core::types::Pos;
//!
//! let mut game = GameSession::new(BoardConfig::default(), 12345).unwrap();
//!
//! let outcome = game.request_swap(Pos::new(0, 0), Pos::new(0, 1));
//! assert!(outcome.accepted);
//! assert_eq!(game.score() as usize, outcome.removed);
//!
//! // Not adjacent: refused, board untouched.
//! let before = game.board().clone();
//! assert!(!game.request_swap(Pos::new(5, 5), Pos::new(7, 5)).accepted);
//! assert_eq!(game.board(), &before);
//! ```

pub mod board;
pub mod cascade;
pub mod config;
pub mod coords;
pub mod error;
pub mod generator;
pub mod gravity;
pub mod matcher;
pub mod session;
pub mod snapshot;
pub mod swap;

pub use tui_match3_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cascade::{run_cascade, Cascade, CascadeReport, CascadeStep};
pub use config::BoardConfig;
pub use coords::{coordinate_label, parse_coordinate};
pub use error::{EngineError, InvalidMove};
pub use generator::{color_is_allowed, generate};
pub use gravity::{compact, is_compacted};
pub use matcher::{find_matches, is_part_of_match, MatchSet};
pub use session::{GameSession, SwapOutcome};
pub use snapshot::{fnv1a64, GameSnapshot};
pub use swap::{swap, validate_swap};

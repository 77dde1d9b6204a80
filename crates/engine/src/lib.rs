//! Paced play on top of the core engine.
//!
//! [`GameDriver`] turns [`GameAction`](types::GameAction)s into session calls
//! and advances cascades one phase at a time as the main loop reports elapsed
//! time. [`PlayClock`] tracks how long the current game has run.

pub mod clock;
pub mod driver;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use clock::PlayClock;
pub use driver::{GameDriver, Pacing, Status};

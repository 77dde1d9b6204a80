//! Terminal input module.
//!
//! Maps `crossterm` key events into form edits ([`FormKey`]) and keeps the
//! move form the player fills in. The form produces
//! [`GameAction`](crate::types::GameAction)s for the game driver.

pub mod form;
pub mod map;

pub use tui_match3_core as core;
pub use tui_match3_types as types;

pub use form::{Field, MoveForm};
pub use map::{handle_key_event, should_quit, FormKey};

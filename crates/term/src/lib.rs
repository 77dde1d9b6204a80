//! Terminal front end for the match-3 game.
//!
//! A small game-oriented rendering layer: [`GameView`] draws a snapshot into
//! a [`FrameBuffer`] of styled glyphs and [`TerminalRenderer`] flushes it to
//! the terminal, redrawing only what changed since the previous frame.
//! Each token is drawn two columns wide to keep cells roughly square.

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use tui_match3_core as core;
pub use tui_match3_input as input;
pub use tui_match3_types as types;

pub use fb::{Style, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, HudView, Viewport};
pub use render_throttle::{fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

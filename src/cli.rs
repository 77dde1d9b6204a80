//! Command-line options.
//!
//! Board size, palette and pacing are checked when the session is created,
//! so out-of-range values surface as [`EngineError`](crate::core::EngineError)s
//! rather than parser errors.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::core::BoardConfig;
use crate::engine::Pacing;
use crate::types::{BOARD_COLS, BOARD_ROWS, PALETTE_SIZE, REMOVE_DELAY_MS};

/// Terminal match-3: swap neighbouring tokens to line up three or more
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tui-match3")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Number of board rows (3 to 26)
    #[arg(long, default_value_t = BOARD_ROWS as usize)]
    pub rows: usize,

    /// Number of board columns (3 to 26)
    #[arg(long, default_value_t = BOARD_COLS as usize)]
    pub cols: usize,

    /// Number of token colors (3 to 8)
    #[arg(long, default_value_t = PALETTE_SIZE as usize)]
    pub colors: usize,

    /// RNG seed; defaults to the current time
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after removing matches, in milliseconds. Tokens fall after half of it.
    #[arg(long, default_value_t = REMOVE_DELAY_MS)]
    pub delay_ms: u32,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,

    /// Write log messages to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn board_config(&self) -> BoardConfig {
        BoardConfig::new(self.rows, self.cols, self.colors)
    }

    pub fn pacing(&self) -> Pacing {
        Pacing::from_delay(self.delay_ms)
    }

    /// The explicit seed, or wall-clock seconds.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default()
        })
    }

    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

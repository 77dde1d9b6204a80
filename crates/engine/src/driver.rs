//! Paced game driver.
//!
//! The core resolves a cascade synchronously. For play, each phase is held on
//! screen for a while: after matched tokens are removed the board waits
//! `remove_delay_ms` before compacting, and after compaction it waits
//! `drop_delay_ms` before the next detection pass. The driver owns those
//! timers and the play clock; the session stays timer-free.
//!
//! Moves and restarts are refused until the cascade has settled.

use log::{debug, info};

use crate::core::{CascadeReport, CascadeStep, EngineError, GameSession};
use crate::types::{GameAction, DROP_DELAY_MS, REMOVE_DELAY_MS};
use crate::PlayClock;

/// Delays between cascade phases, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub remove_delay_ms: u32,
    pub drop_delay_ms: u32,
}

impl Pacing {
    /// Removal delay `ms`, compaction delay half of it
    pub fn from_delay(ms: u32) -> Self {
        Self {
            remove_delay_ms: ms,
            drop_delay_ms: ms / 2,
        }
    }

    /// No pauses: a move resolves its whole cascade immediately
    pub fn instant() -> Self {
        Self::from_delay(0)
    }
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            remove_delay_ms: REMOVE_DELAY_MS,
            drop_delay_ms: DROP_DELAY_MS,
        }
    }
}

/// Feedback line for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    SwapAccepted,
    InvalidInput,
    Busy,
}

impl Status {
    pub fn message(&self) -> &'static str {
        match self {
            Status::Idle => "",
            Status::SwapAccepted => "Swap was successful!",
            Status::InvalidInput => "Invalid input.",
            Status::Busy => "Wait for the board to settle.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameDriver {
    session: GameSession,
    pacing: Pacing,
    clock: PlayClock,
    /// Time left before the pending cascade may take its next step
    wait_ms: u32,
    status: Status,
    last_cascade: Option<CascadeReport>,
}

impl GameDriver {
    pub fn new(session: GameSession, pacing: Pacing) -> Self {
        Self {
            session,
            pacing,
            clock: PlayClock::new(),
            wait_ms: 0,
            status: Status::Idle,
            last_cascade: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn clock(&self) -> &PlayClock {
        &self.clock
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Totals of the most recently settled cascade
    pub fn last_cascade(&self) -> Option<CascadeReport> {
        self.last_cascade
    }

    /// True while a cascade is playing out; input should be disabled
    pub fn is_busy(&self) -> bool {
        self.session.is_busy()
    }

    /// Apply a player action. Returns true if it changed the game.
    pub fn apply(&mut self, action: GameAction) -> Result<bool, EngineError> {
        if self.is_busy() {
            self.status = Status::Busy;
            return Ok(false);
        }

        match action {
            GameAction::Move { first, axis } => {
                let Some(first) = first else {
                    self.status = Status::InvalidInput;
                    return Ok(false);
                };
                let second = first.step(axis);
                match self.session.begin_swap(first, second) {
                    Ok(()) => {
                        self.status = Status::SwapAccepted;
                        self.wait_ms = 0;
                        self.last_cascade = None;
                        self.advance_ready();
                        Ok(true)
                    }
                    Err(reason) => {
                        debug!("move at {:?} {:?} refused: {}", first, axis, reason);
                        self.status = Status::InvalidInput;
                        Ok(false)
                    }
                }
            }
            GameAction::Restart => {
                self.session.restart()?;
                self.clock.reset();
                self.wait_ms = 0;
                self.status = Status::Idle;
                self.last_cascade = None;
                info!("restarted (episode {})", self.session.episode_id());
                Ok(true)
            }
        }
    }

    /// Advance timers by `elapsed_ms` and run any cascade step that is due.
    ///
    /// Returns true if the board changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        self.clock.tick(elapsed_ms);
        if !self.is_busy() {
            return false;
        }
        self.wait_ms = self.wait_ms.saturating_sub(elapsed_ms);
        self.advance_ready()
    }

    /// Run cascade steps while no delay is pending.
    fn advance_ready(&mut self) -> bool {
        let mut changed = false;
        while self.wait_ms == 0 {
            let Some(step) = self.session.step() else {
                break;
            };
            match step {
                CascadeStep::Removed { count, .. } => {
                    changed = true;
                    self.wait_ms = self.pacing.remove_delay_ms;
                    debug!("removed {} (score {})", count, self.session.score());
                }
                CascadeStep::Compacted { moved } => {
                    changed |= moved > 0;
                    self.wait_ms = self.pacing.drop_delay_ms;
                }
                CascadeStep::Settled { removed, passes } => {
                    self.last_cascade = Some(CascadeReport { removed, passes });
                    break;
                }
            }
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, BoardConfig};
    use crate::types::{Axis, Pos};

    fn driver(pacing: Pacing) -> GameDriver {
        let mut session = GameSession::new(BoardConfig::default(), 7).unwrap();
        // Swapping (0,1) down with (1,1) lines up two rows of three.
        *session.board_mut() = Board::from_pattern(&["RGR", "GRG", "BRB"]).unwrap();
        GameDriver::new(session, pacing)
    }

    fn swap_down() -> GameAction {
        GameAction::Move {
            first: Some(Pos::new(0, 1)),
            axis: Axis::Vertical,
        }
    }

    #[test]
    fn instant_pacing_resolves_in_apply() {
        let mut d = driver(Pacing::instant());
        assert!(d.apply(swap_down()).unwrap());
        assert!(!d.is_busy());
        assert_eq!(d.session().score(), 6);
        assert_eq!(d.last_cascade(), Some(CascadeReport { removed: 6, passes: 2 }));
        assert_eq!(d.status().message(), "Swap was successful!");
    }

    #[test]
    fn paced_cascade_waits_between_phases() {
        let mut d = driver(Pacing::from_delay(1000));
        d.apply(swap_down()).unwrap();

        // Removal happens right away, compaction waits.
        assert!(d.is_busy());
        assert_eq!(d.session().score(), 6);
        assert_eq!(d.session().board().to_string(), "...\n...\nBRB");

        assert!(!d.tick(999));
        assert!(d.is_busy());

        // Nothing above the cleared rows, so the drop moves nothing.
        d.tick(1);
        assert!(d.is_busy());

        // Drop delay is half the removal delay.
        d.tick(499);
        assert!(d.is_busy());
        d.tick(1);
        assert!(!d.is_busy());
        assert_eq!(d.last_cascade().map(|r| r.removed), Some(6));
    }

    #[test]
    fn input_refused_while_busy() {
        let mut d = driver(Pacing::from_delay(1000));
        d.apply(swap_down()).unwrap();
        assert!(!d.apply(GameAction::Restart).unwrap());
        assert_eq!(d.status(), Status::Busy);
        assert_eq!(d.session().episode_id(), 0);
    }

    #[test]
    fn unparsed_or_invalid_moves_report_invalid_input() {
        let mut d = driver(Pacing::instant());
        let before = d.session().board().clone();

        let none = GameAction::Move {
            first: None,
            axis: Axis::Horizontal,
        };
        assert!(!d.apply(none).unwrap());
        assert_eq!(d.status(), Status::InvalidInput);

        // Right edge: no neighbour to the right.
        let edge = GameAction::Move {
            first: Some(Pos::new(0, 2)),
            axis: Axis::Horizontal,
        };
        assert!(!d.apply(edge).unwrap());
        assert_eq!(d.status().message(), "Invalid input.");
        assert_eq!(d.session().board(), &before);
        assert_eq!(d.session().moves(), 0);
    }

    #[test]
    fn restart_resets_clock_and_score() {
        let mut d = driver(Pacing::instant());
        d.apply(swap_down()).unwrap();
        d.tick(5000);
        assert_eq!(d.clock().seconds(), 5);

        assert!(d.apply(GameAction::Restart).unwrap());
        assert_eq!(d.clock().elapsed_ms(), 0);
        assert_eq!(d.session().score(), 0);
        assert_eq!(d.session().episode_id(), 1);
        assert_eq!(d.status(), Status::Idle);
    }
}

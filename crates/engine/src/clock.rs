//! Elapsed play time.

/// Wall-clock play time, advanced by the main loop's elapsed milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayClock {
    elapsed_ms: u64,
}

impl PlayClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms as u64);
    }

    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Whole minutes played
    pub fn minutes(&self) -> u64 {
        self.elapsed_ms / 60_000
    }

    /// Seconds within the current minute
    pub fn seconds(&self) -> u64 {
        (self.elapsed_ms / 1000) % 60
    }

    /// `mm:ss` text, minutes keep growing past 99
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes(), self.seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_roll_into_minutes() {
        let mut clock = PlayClock::new();
        clock.tick(59_999);
        assert_eq!((clock.minutes(), clock.seconds()), (0, 59));
        clock.tick(1);
        assert_eq!((clock.minutes(), clock.seconds()), (1, 0));
        assert_eq!(clock.display(), "01:00");
    }

    #[test]
    fn reset_zeroes() {
        let mut clock = PlayClock::new();
        clock.tick(125_000);
        assert_eq!(clock.display(), "02:05");
        clock.reset();
        assert_eq!(clock.display(), "00:00");
    }
}

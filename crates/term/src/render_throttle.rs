//! Frame skipping for a mostly static screen.
//!
//! The match-3 screen only changes on input, on cascade phases and once per
//! second on the clock. The main loop hashes what it is about to draw and
//! asks [`RenderThrottle`] whether a frame is needed.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self {
            min_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Render on the first call, whenever `fingerprint` changes, and otherwise
    /// at most once per `min_interval_ms` as a refresh.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = !self.has_rendered
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.min_interval_ms;
        if due {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }

    /// Forget the last frame so the next call renders.
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }
}

/// Mix values into a frame fingerprint.
pub fn fingerprint(parts: &[u64]) -> u64 {
    parts.iter().fold(0xcbf29ce484222325, |h, &p| {
        (h ^ p).wrapping_mul(0x100000001b3)
    })
}

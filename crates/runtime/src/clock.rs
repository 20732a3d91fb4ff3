//! Frame timing.

use std::time::{Duration, Instant};

/// Hands out the simulated time step for each frame.
///
/// Wall-clock mode measures the real time since the previous tick (the first
/// tick measures from construction). Fixed mode returns the same interval on
/// every tick. Either way the interval is scaled by `fast_forward`.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    fixed: Option<Duration>,
    fast_forward: f32,
}

impl FrameClock {
    #[must_use]
    pub fn wall(fast_forward: f32) -> Self {
        Self {
            last: Instant::now(),
            fixed: None,
            fast_forward,
        }
    }

    #[must_use]
    pub fn fixed(interval: Duration, fast_forward: f32) -> Self {
        Self {
            last: Instant::now(),
            fixed: Some(interval),
            fast_forward,
        }
    }

    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.fixed.is_some()
    }

    /// Simulated seconds to advance this frame.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = self.fixed.unwrap_or_else(|| now - self.last);
        self.last = now;
        elapsed.as_secs_f32() * self.fast_forward
    }
}

//! Visual countdown clock.
//!
//! The clock is display only: running out of time never ends the game.

use std::time::Duration;

use parlor_core::Color;

/// Remaining time for each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    initial: Duration,
    remaining: [Duration; Color::COUNT],
}

impl Clock {
    /// Create a clock with `initial` on both sides.
    pub const fn new(initial: Duration) -> Clock {
        Clock {
            initial,
            remaining: [initial; Color::COUNT],
        }
    }

    /// Return the time left for `side`.
    #[inline]
    pub const fn remaining(&self, side: Color) -> Duration {
        self.remaining[side.index()]
    }

    /// Return the time each side started with.
    #[inline]
    pub const fn initial(&self) -> Duration {
        self.initial
    }

    /// Deduct `elapsed` from `side`, stopping at zero.
    pub fn tick(&mut self, side: Color, elapsed: Duration) {
        let left = &mut self.remaining[side.index()];
        *left = left.saturating_sub(elapsed);
    }

    /// Return `true` if `side` has no time left.
    #[inline]
    pub fn is_flagged(&self, side: Color) -> bool {
        self.remaining(side).is_zero()
    }

    /// Restore both sides to the initial time.
    pub fn reset(&mut self) {
        self.remaining = [self.initial; Color::COUNT];
    }

    /// Format the time left for `side` as `mm:ss`.
    pub fn display(&self, side: Color) -> String {
        let secs = self.remaining(side).as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for Clock {
    fn default() -> Self {
        Clock::new(crate::config::DEFAULT_CLOCK)
    }
}

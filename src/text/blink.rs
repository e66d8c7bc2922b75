//! Caret blink phase.

use std::time::Duration;

/// Caret blink animation driven by per-tick elapsed time.
///
/// The phase counts half-periods: the caret is drawn during even phases and
/// hidden during odd ones. [`CaretBlink::pause`] pushes the phase below zero
/// so the caret stays solid for the grace delay before blinking resumes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaretBlink {
    phase: f32,
    speed: f32,
    after_move_delay: f32,
}

impl CaretBlink {
    /// `speed` is phases per second; `after_move_delay` is in phases.
    #[must_use]
    pub fn new(speed: f32, after_move_delay: f32) -> Self {
        Self {
            phase: 0.0,
            speed,
            after_move_delay,
        }
    }

    /// Advance by one tick's elapsed time.
    pub fn advance(&mut self, elapsed: Duration) {
        self.phase += elapsed.as_secs_f32() * self.speed;
    }

    /// Hold the caret solid for the grace delay.
    pub fn pause(&mut self) {
        self.phase = -self.after_move_delay;
    }

    /// Whether the caret is in a drawn phase.
    #[must_use]
    pub fn is_on(&self) -> bool {
        self.phase < 0.0 || (self.phase as i64) % 2 == 0
    }
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self::new(2.0, 2.0)
    }
}

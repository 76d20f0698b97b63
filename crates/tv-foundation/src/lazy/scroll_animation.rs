//! Stepped scroll animation task.

use tv_ui_layout::Dp;

/// Per-tick scroll increment in density-independent pixels.
pub const SCROLL_STEP: Dp = Dp(50.0);

/// An in-flight focus scroll, consumed one fixed-size step per frame.
///
/// Replaces the previous animation outright when a new focus target arrives;
/// the unconsumed remainder is simply dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollAnimation {
    remaining: f32,
    step_px: f32,
}

impl ScrollAnimation {
    pub fn new(delta: f32, step_px: f32) -> Self {
        Self {
            remaining: delta,
            step_px,
        }
    }

    /// Takes the next step toward the target, or `None` when finished.
    ///
    /// The final step is the exact remainder, so the total consumed always
    /// equals the original delta.
    pub fn next_step(&mut self) -> Option<f32> {
        if self.remaining == 0.0 {
            return None;
        }
        let step = self.remaining.clamp(-self.step_px, self.step_px);
        self.remaining -= step;
        Some(step)
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

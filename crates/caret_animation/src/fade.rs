//! Opacity fades
//!
//! A fade animates opacity from wherever it currently is towards 0 or 1.
//! Starting a fade mid-way through another one picks up from the current
//! value, so interrupted fades never jump.

use crate::easing::Easing;

/// An eased opacity transition advanced in milliseconds
#[derive(Clone, Debug)]
pub struct OpacityFade {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl OpacityFade {
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// A fade that has already arrived at `value`
    pub fn settled(value: f32) -> Self {
        Self::new(value, value, 0.0, Easing::Linear)
    }

    /// Retarget from the current value
    pub fn retarget(&mut self, to: f32, duration_ms: f32) {
        *self = Self::new(self.value(), to, duration_ms, self.easing);
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn progress(&self) -> f32 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// Current opacity
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `dt_ms`. Returns true while still animating.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
            if self.elapsed_ms >= self.duration_ms {
                self.elapsed_ms = self.duration_ms;
            }
        }
        !self.is_finished()
    }
}

impl Default for OpacityFade {
    fn default() -> Self {
        Self::settled(1.0)
    }
}

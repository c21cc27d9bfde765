//! Blink cadence
//!
//! One cycle is four stages measured from the moment the caret becomes
//! visible:
//!
//! ```text
//!  visible ───────────┐                      ┌──────────
//!                     │ fade out             │ fade in
//!                     └──────── hidden ──────┘
//!  |<---- hold ----->|<fade>|<--- hidden -->|<fade>|
//! ```
//!
//! The visibility flag flips at the start of each fade, so `visible` is
//! false from the start of the fade-out until the start of the fade-in.
//! The cycle then repeats from the hold stage.

use std::time::Duration;

/// Stage of a blink cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlinkStage {
    /// Fully visible
    Hold,
    /// Animating towards hidden
    FadeOut,
    /// Fully hidden
    Hidden,
    /// Animating towards visible
    FadeIn,
}

impl BlinkStage {
    /// Target visibility while in this stage
    pub fn visible(self) -> bool {
        matches!(self, BlinkStage::Hold | BlinkStage::FadeIn)
    }
}

/// Stage durations of one blink cycle, in milliseconds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlinkTiming {
    pub hold_ms: f32,
    pub fade_out_ms: f32,
    pub hidden_ms: f32,
    pub fade_in_ms: f32,
}

impl BlinkTiming {
    /// Native caret cadence: about half a second on, a short fade, a quarter
    /// second off, a short fade back.
    pub const fn modern() -> Self {
        Self {
            hold_ms: 533.0,
            fade_out_ms: 133.0,
            hidden_ms: 233.0,
            fade_in_ms: 133.0,
        }
    }

    /// Cadence of the older timer-based path: an initial half second, then
    /// 120ms fades on a one second period.
    pub const fn classic() -> Self {
        Self {
            hold_ms: 500.0,
            fade_out_ms: 120.0,
            hidden_ms: 260.0,
            fade_in_ms: 120.0,
        }
    }

    /// Look up a built-in cadence by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "modern" => Some(Self::modern()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }

    /// Length of one full cycle
    pub fn period_ms(&self) -> f32 {
        self.hold_ms + self.fade_out_ms + self.hidden_ms + self.fade_in_ms
    }

    /// Offset at which visibility turns off
    pub fn hide_at_ms(&self) -> f32 {
        self.hold_ms
    }

    /// Offset at which visibility turns back on
    pub fn show_at_ms(&self) -> f32 {
        self.hold_ms + self.fade_out_ms + self.hidden_ms
    }

    /// Stage at `elapsed_ms` after the cycle started, wrapping every period
    pub fn stage_at(&self, elapsed_ms: f32) -> BlinkStage {
        let period = self.period_ms();
        if period <= 0.0 {
            return BlinkStage::Hold;
        }
        let t = elapsed_ms.max(0.0) % period;

        if t < self.hold_ms {
            BlinkStage::Hold
        } else if t < self.hold_ms + self.fade_out_ms {
            BlinkStage::FadeOut
        } else if t < self.show_at_ms() {
            BlinkStage::Hidden
        } else {
            BlinkStage::FadeIn
        }
    }

    /// Visibility flag at `elapsed_ms` after the cycle started
    pub fn visible_at(&self, elapsed_ms: f32) -> bool {
        self.stage_at(elapsed_ms).visible()
    }

    /// Duration of a stage as a [`Duration`]
    pub fn stage_duration(&self, stage: BlinkStage) -> Duration {
        let ms = match stage {
            BlinkStage::Hold => self.hold_ms,
            BlinkStage::FadeOut => self.fade_out_ms,
            BlinkStage::Hidden => self.hidden_ms,
            BlinkStage::FadeIn => self.fade_in_ms,
        };
        Duration::from_secs_f32(ms.max(0.0) / 1000.0)
    }
}

impl Default for BlinkTiming {
    fn default() -> Self {
        Self::modern()
    }
}

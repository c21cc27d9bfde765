//! Blink controller
//!
//! Owns the caret's visibility flag and the one blink cycle that drives it.
//!
//! The caret is either *blinking* (the cycle runs) or *solid* (the host
//! reports active typing, so the caret is forced fully visible and nothing
//! is scheduled). Mode changes go through a small state machine:
//!
//! ```text
//!              Blinking             Solid
//! Unobserved ───────────▶ Blinking ◀──────▶ Solid ◀─────────── Unobserved
//! ```
//!
//! There is no edge from a mode to itself, so observing the same mode twice
//! does nothing. `Unobserved` has edges to both, so the first observation
//! after creation (or after [`reset`](BlinkController::reset)) always fires.
//!
//! The active cycle lives in a single `Option<Handle>`. Starting replaces
//! it, stopping takes it, and dropping a handle cancels it, so at most one
//! cycle exists and a replaced cycle can never deliver another edge.

use caret_core::fsm::StateMachine;
use caret_core::observer::{ObserverId, Observers};

use crate::easing::Easing;
use crate::fade::OpacityFade;
use crate::timer::{BlinkHandle, BlinkTimer, FrameTimer};
use crate::timing::BlinkTiming;

/// Caret display mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlinkMode {
    /// The periodic on/off cycle runs
    Blinking,
    /// Forced fully visible with no animation
    Solid,
}

impl BlinkMode {
    /// Mode implied by the host's typing input
    pub fn from_typing(is_typing: bool) -> Self {
        if is_typing {
            BlinkMode::Solid
        } else {
            BlinkMode::Blinking
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ModePhase {
    Unobserved,
    Blinking,
    Solid,
}

impl ModePhase {
    fn mode(self) -> Option<BlinkMode> {
        match self {
            ModePhase::Unobserved => None,
            ModePhase::Blinking => Some(BlinkMode::Blinking),
            ModePhase::Solid => Some(BlinkMode::Solid),
        }
    }
}

fn mode_machine() -> StateMachine<ModePhase, BlinkMode> {
    StateMachine::builder(ModePhase::Unobserved)
        .on(ModePhase::Unobserved, BlinkMode::Blinking, ModePhase::Blinking)
        .on(ModePhase::Unobserved, BlinkMode::Solid, ModePhase::Solid)
        .on(ModePhase::Blinking, BlinkMode::Solid, ModePhase::Solid)
        .on(ModePhase::Solid, BlinkMode::Blinking, ModePhase::Blinking)
        .build()
}

/// Snapshot delivered to observers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlinkState {
    pub visible: bool,
    /// `None` until the first mode has been observed
    pub mode: Option<BlinkMode>,
}

/// Drives a caret's visibility through the blink cycle
pub struct BlinkController<T: BlinkTimer = FrameTimer> {
    timer: T,
    timing: BlinkTiming,
    easing: Easing,
    visible: bool,
    modes: StateMachine<ModePhase, BlinkMode>,
    active: Option<T::Handle>,
    fade: OpacityFade,
    observers: Observers<BlinkState>,
}

impl BlinkController<FrameTimer> {
    /// Frame-driven controller with the native cadence
    pub fn new() -> Self {
        Self::with_timer(FrameTimer, BlinkTiming::default())
    }
}

impl Default for BlinkController<FrameTimer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: BlinkTimer> BlinkController<T> {
    pub fn with_timer(timer: T, timing: BlinkTiming) -> Self {
        Self {
            timer,
            timing,
            easing: Easing::EaseInOut,
            visible: true,
            modes: mode_machine(),
            active: None,
            fade: OpacityFade::settled(1.0),
            observers: Observers::new(),
        }
    }

    /// Use a different curve for the fades
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    // ========== State ==========

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Current mode, `None` before the first observation
    pub fn mode(&self) -> Option<BlinkMode> {
        self.modes.current_state().mode()
    }

    pub fn state(&self) -> BlinkState {
        BlinkState {
            visible: self.visible,
            mode: self.mode(),
        }
    }

    /// Opacity to render with. Always 1 while solid.
    pub fn opacity(&self) -> f32 {
        if self.mode() == Some(BlinkMode::Solid) {
            1.0
        } else {
            self.fade.value()
        }
    }

    /// Whether a blink cycle is currently scheduled
    pub fn is_timer_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn timing(&self) -> &BlinkTiming {
        &self.timing
    }

    /// Change the cadence. A running cycle restarts with the new timing.
    pub fn set_timing(&mut self, timing: BlinkTiming) {
        self.timing = timing;
        if self.active.is_some() {
            self.start();
        }
    }

    // ========== Observers ==========

    /// Get notified whenever visibility or mode changes
    pub fn subscribe<F>(&mut self, callback: F) -> ObserverId
    where
        F: FnMut(&BlinkState) + Send + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ========== Lifecycle ==========

    /// Begin the blink cycle from its fully visible phase.
    ///
    /// Any running cycle is dropped first, so calling this again restarts
    /// cleanly. Does nothing unless the mode is [`BlinkMode::Blinking`].
    pub fn start(&mut self) {
        if self.mode() != Some(BlinkMode::Blinking) {
            tracing::debug!("blink: start ignored in mode {:?}", self.mode());
            return;
        }

        self.active = None;
        let was_visible = self.visible;
        self.visible = true;
        self.fade = OpacityFade::settled(1.0);
        self.active = Some(self.timer.schedule(self.timing));
        tracing::debug!("blink: cycle started ({}ms period)", self.timing.period_ms());

        if !was_visible {
            self.notify();
        }
    }

    /// Cancel the running cycle, if any.
    ///
    /// Opacity freezes where it is, so nothing visible changes afterwards.
    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("blink: cycle cancelled");
        }
        self.fade = OpacityFade::settled(self.fade.value());
    }

    /// Apply a mode. Returns true if it was a change and took effect.
    pub fn set_mode(&mut self, mode: BlinkMode) -> bool {
        let Some((from, to)) = self.modes.send(mode) else {
            tracing::trace!("blink: already {:?}", mode);
            return false;
        };
        tracing::debug!("blink: mode {:?} -> {:?}", from, to);

        match mode {
            BlinkMode::Solid => {
                self.stop();
                self.visible = true;
                self.fade = OpacityFade::settled(1.0);
            }
            BlinkMode::Blinking => self.start(),
        }

        self.notify();
        true
    }

    /// Feed the host's typing input: typing means solid, idle means blinking
    pub fn observe_typing(&mut self, is_typing: bool) -> bool {
        self.set_mode(BlinkMode::from_typing(is_typing))
    }

    /// Stop and forget the observed mode, as if freshly created
    pub fn reset(&mut self) {
        self.stop();
        self.modes.reset();
        self.visible = true;
        self.fade = OpacityFade::settled(1.0);
    }

    /// Advance fades by `dt_ms` and apply edges from the running cycle.
    ///
    /// Returns true if anything that affects rendering changed.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let fading = self.fade.tick(dt_ms);

        let edges = match self.active.as_mut() {
            Some(handle) => handle.poll(dt_ms),
            None => return fading,
        };

        let mut flipped = false;
        for visible in edges {
            if visible == self.visible {
                continue;
            }
            tracing::trace!("blink: visible -> {}", visible);
            self.visible = visible;
            let (target, duration) = if visible {
                (1.0, self.timing.fade_in_ms)
            } else {
                (0.0, self.timing.fade_out_ms)
            };
            self.fade = OpacityFade::new(self.fade.value(), target, duration, self.easing);
            flipped = true;
        }

        if flipped {
            self.notify();
        }
        fading || flipped
    }

    fn notify(&mut self) {
        let state = self.state();
        self.observers.notify(&state);
    }
}

impl<T: BlinkTimer> std::fmt::Debug for BlinkController<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlinkController")
            .field("visible", &self.visible)
            .field("mode", &self.mode())
            .field("timer_active", &self.active.is_some())
            .field("opacity", &self.opacity())
            .finish()
    }
}

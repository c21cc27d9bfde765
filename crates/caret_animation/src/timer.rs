//! Blink timer seam
//!
//! The controller never talks to a clock directly. It asks a [`BlinkTimer`]
//! to schedule a cycle and gets back a [`BlinkHandle`] that it owns
//! exclusively. Polling the handle yields the visibility edges that fired;
//! dropping it cancels everything still pending.
//!
//! Exactly one timer implementation is picked per controller at
//! construction: [`FrameTimer`] for hosts with a frame clock, or
//! `TaskTimer` (feature `tokio`) for hosts running an async runtime.

use smallvec::SmallVec;

use crate::sequence::BlinkSequence;
use crate::timing::BlinkTiming;

/// Visibility edges reported by a poll, oldest first.
/// `true` means the caret turned visible, `false` that it turned hidden.
pub type BlinkEdges = SmallVec<[bool; 4]>;

/// A scheduled blink cycle. Dropping the handle cancels it.
pub trait BlinkHandle {
    /// Collect edges that fired since the last poll.
    ///
    /// `dt_ms` is the time since the previous poll as seen by the host's
    /// frame clock. Handles driven by their own clock may ignore it.
    fn poll(&mut self, dt_ms: f32) -> BlinkEdges;
}

/// Something that can schedule blink cycles
pub trait BlinkTimer {
    type Handle: BlinkHandle;

    /// Schedule a new cycle starting now, at its fully visible phase
    fn schedule(&mut self, timing: BlinkTiming) -> Self::Handle;
}

/// Timer driven by the host's frame clock
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameTimer;

impl BlinkTimer for FrameTimer {
    type Handle = BlinkSequence;

    fn schedule(&mut self, timing: BlinkTiming) -> BlinkSequence {
        BlinkSequence::new(timing)
    }
}

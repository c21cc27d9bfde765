//! Frame-driven blink sequence
//!
//! A [`BlinkSequence`] is one scheduled blink cycle, advanced by the host's
//! frame clock. It loops forever; dropping it is how it gets cancelled, so a
//! sequence that has been replaced or stopped cannot fire again.

use crate::timer::{BlinkEdges, BlinkHandle};
use crate::timing::{BlinkStage, BlinkTiming};

/// Next point of interest in the current cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Boundary {
    Hide,
    Show,
    Wrap,
}

/// A looping blink cycle advanced by [`tick`](BlinkSequence::tick)
#[derive(Clone, Debug)]
pub struct BlinkSequence {
    timing: BlinkTiming,
    /// Milliseconds into the current cycle
    elapsed_ms: f32,
    /// Boundaries are crossed in order even when stages have zero length
    next: Boundary,
    /// Completed cycles since the sequence started
    cycles: u64,
}

impl BlinkSequence {
    /// Start a fresh cycle at its initial, fully visible phase
    pub fn new(timing: BlinkTiming) -> Self {
        Self {
            timing,
            elapsed_ms: 0.0,
            next: Boundary::Hide,
            cycles: 0,
        }
    }

    pub fn timing(&self) -> &BlinkTiming {
        &self.timing
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn stage(&self) -> BlinkStage {
        self.timing.stage_at(self.elapsed_ms)
    }

    /// Visibility after the edges reported so far
    pub fn visible(&self) -> bool {
        self.next != Boundary::Show
    }

    fn offset_of(&self, boundary: Boundary) -> f32 {
        match boundary {
            Boundary::Hide => self.timing.hide_at_ms(),
            Boundary::Show => self.timing.show_at_ms(),
            Boundary::Wrap => self.timing.period_ms(),
        }
    }

    /// Advance by `dt_ms` and return every visibility change crossed, in order.
    ///
    /// Whole cycles beyond the last one are skipped without reporting their
    /// edges; they would cancel out anyway.
    pub fn tick(&mut self, dt_ms: f32) -> BlinkEdges {
        let mut edges = BlinkEdges::new();
        let period = self.timing.period_ms();

        // A cycle with no hidden time never produces an edge
        let has_hidden_time = self.timing.show_at_ms() > self.timing.hide_at_ms();
        if dt_ms.is_nan() || dt_ms <= 0.0 || !has_hidden_time {
            return edges;
        }

        let mut remaining = dt_ms;
        if remaining > period {
            let skip = ((remaining / period).floor() - 1.0).max(0.0);
            remaining -= skip * period;
            self.cycles += skip as u64;
        }

        loop {
            let at = self.offset_of(self.next);
            let step = (at - self.elapsed_ms).max(0.0);
            if step > remaining {
                self.elapsed_ms += remaining;
                break;
            }

            remaining -= step;
            self.elapsed_ms = at;
            self.next = match self.next {
                Boundary::Hide => {
                    edges.push(false);
                    Boundary::Show
                }
                Boundary::Show => {
                    edges.push(true);
                    Boundary::Wrap
                }
                Boundary::Wrap => {
                    self.elapsed_ms = 0.0;
                    self.cycles += 1;
                    Boundary::Hide
                }
            };
        }

        edges
    }
}

impl BlinkHandle for BlinkSequence {
    fn poll(&mut self, dt_ms: f32) -> BlinkEdges {
        self.tick(dt_ms)
    }
}

//! Animation tokens

use caret_animation::BlinkTiming;

/// Animation cadence tokens
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationTokens {
    /// Stage durations of the caret blink cycle
    pub caret_blink: BlinkTiming,
}

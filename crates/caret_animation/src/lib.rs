//! Caret Animation System
//!
//! Blink timing, opacity fades, and the controller that ties them to a
//! caret's mode.
//!
//! # Features
//!
//! - **Blink Timing**: the native caret cadence as a table of stages
//! - **Blink Sequences**: frame-driven, looping, and cancelled by drop
//! - **Opacity Fades**: eased transitions between visible and hidden
//! - **Blink Controller**: edge-triggered Blinking/Solid mode automaton
//! - **Task Timer** (feature `tokio`): the same cadence from a spawned task
//!
//! # Example
//!
//! ```rust
//! use caret_animation::{BlinkController, BlinkMode};
//!
//! let mut blink = BlinkController::new();
//! blink.set_mode(BlinkMode::Blinking);
//! assert!(blink.visible());
//!
//! blink.tick(600.0);
//! assert!(!blink.visible());
//!
//! blink.set_mode(BlinkMode::Solid);
//! assert!(blink.visible());
//! assert!(!blink.is_timer_active());
//! ```

pub mod controller;
pub mod easing;
pub mod fade;
pub mod sequence;
pub mod timer;
pub mod timing;

#[cfg(feature = "tokio")]
pub mod task;

pub use controller::{BlinkController, BlinkMode, BlinkState};
pub use easing::Easing;
pub use fade::OpacityFade;
pub use sequence::BlinkSequence;
pub use timer::{BlinkEdges, BlinkHandle, BlinkTimer, FrameTimer};
pub use timing::{BlinkStage, BlinkTiming};

#[cfg(feature = "tokio")]
pub use task::{TaskHandle, TaskTimer, TimerError};

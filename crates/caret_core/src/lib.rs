//! Caret Core
//!
//! Foundational primitives shared by the caret crates:
//!
//! - **Geometry**: points, sizes, rects, colors and brushes
//! - **Drawing**: the [`DrawContext`] trait and a command recorder
//! - **Events**: lifecycle and input notifications from the host UI
//! - **State Machines**: typed, edge-triggered transition tables
//! - **Observers**: change notification lists for re-render triggers
//!
//! # Example
//!
//! ```rust
//! use caret_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Light { Off, On }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Switch { Flip }
//!
//! let mut fsm = StateMachine::builder(Light::Off)
//!     .on(Light::Off, Switch::Flip, Light::On)
//!     .on(Light::On, Switch::Flip, Light::Off)
//!     .build();
//!
//! assert_eq!(fsm.send(Switch::Flip), Some((Light::Off, Light::On)));
//! assert!(fsm.is_in(Light::On));
//! ```

pub mod draw;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod observer;

pub use draw::{DrawCommand, DrawContext, RecordingContext};
pub use events::{event_types, Event, EventData, EventType};
pub use fsm::{StateMachine, StateMachineBuilder};
pub use geometry::{Brush, Color, CornerRadius, Point, Rect, Size};
pub use observer::{ObserverId, Observers};

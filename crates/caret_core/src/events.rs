//! Events
//!
//! Lifecycle and input notifications delivered by the host UI to widgets.

/// Event type identifier
pub type EventType = u32;

/// Event types understood by caret widgets
pub mod event_types {
    use super::EventType;

    /// Widget entered the displayed tree
    pub const MOUNT: EventType = 60;
    /// Widget left the displayed tree
    pub const UNMOUNT: EventType = 61;

    /// The host's "is typing" input changed value
    pub const TYPING_CHANGED: EventType = 90;

    /// Frame clock tick, carries the elapsed milliseconds
    pub const FRAME: EventType = 100;
}

/// A UI event with associated data
#[derive(Clone, Debug)]
pub struct Event {
    pub event_type: EventType,
    pub target: u64,
    pub data: EventData,
}

/// Event-specific data
#[derive(Clone, Debug, PartialEq)]
pub enum EventData {
    /// New value of the typing input
    Typing { active: bool },
    /// Milliseconds since the previous frame
    Frame { dt_ms: f32 },
    None,
}

impl Event {
    fn with_data(event_type: EventType, target: u64, data: EventData) -> Self {
        Self {
            event_type,
            target,
            data,
        }
    }

    pub fn mount(target: u64) -> Self {
        Self::with_data(event_types::MOUNT, target, EventData::None)
    }

    pub fn unmount(target: u64) -> Self {
        Self::with_data(event_types::UNMOUNT, target, EventData::None)
    }

    pub fn typing(target: u64, active: bool) -> Self {
        Self::with_data(
            event_types::TYPING_CHANGED,
            target,
            EventData::Typing { active },
        )
    }

    pub fn frame(target: u64, dt_ms: f32) -> Self {
        Self::with_data(event_types::FRAME, target, EventData::Frame { dt_ms })
    }
}

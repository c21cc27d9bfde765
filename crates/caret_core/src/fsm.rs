//! State Machine Runtime
//!
//! Flat, typed state machines for widget modes. States and events are plain
//! `Copy` enums supplied by the widget, and a transition only fires when the
//! table contains an edge from the current state for the sent event. Sending
//! an event that has no edge leaves the machine untouched, which makes every
//! machine edge-triggered by construction.
//!
//! Transitions are recorded in a history for debugging.

use smallvec::SmallVec;
use std::fmt::Debug;

struct Transition<S, E> {
    from_state: S,
    event: E,
    to_state: S,
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: SmallVec<[Transition<S, E>; 8]>,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + PartialEq + Debug,
    E: Copy + PartialEq + Debug,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: SmallVec::new(),
        }
    }

    /// Add a transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition {
            from_state: from,
            event,
            to_state: to,
        });
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            initial_state: self.initial_state,
            current_state: self.initial_state,
            transitions: self.transitions,
            history: Vec::new(),
        }
    }
}

/// A state machine instance
pub struct StateMachine<S, E> {
    initial_state: S,
    current_state: S,
    transitions: SmallVec<[Transition<S, E>; 8]>,
    /// History of state transitions (for debugging)
    history: Vec<(S, E, S)>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + PartialEq + Debug,
    E: Copy + PartialEq + Debug,
{
    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, E, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E) -> bool {
        self.find(event).is_some()
    }

    /// Send an event to the state machine.
    ///
    /// Returns `Some((from, to))` when a transition fired and `None` when the
    /// current state has no edge for `event`.
    pub fn send(&mut self, event: E) -> Option<(S, S)> {
        let idx = self.find(event)?;
        let from = self.current_state;
        let to = self.transitions[idx].to_state;

        tracing::trace!("fsm: {:?} --{:?}--> {:?}", from, event, to);

        self.current_state = to;
        self.history.push((from, event, to));
        Some((from, to))
    }

    /// Return to the initial state without recording a transition
    pub fn reset(&mut self) {
        self.current_state = self.initial_state;
    }

    fn find(&self, event: E) -> Option<usize> {
        let current = self.current_state;
        self.transitions
            .iter()
            .position(|t| t.from_state == current && t.event == event)
    }
}

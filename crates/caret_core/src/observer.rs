//! Change notification
//!
//! An [`Observers`] list lets a rendering layer subscribe to a component's
//! state changes and schedule a re-render, without the component knowing
//! anything about the host's reactive system.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`Observers::subscribe`]
    pub struct ObserverId;
}

type Callback<T> = Box<dyn FnMut(&T) + Send>;

/// A list of change callbacks for values of type `T`
pub struct Observers<T> {
    callbacks: SlotMap<ObserverId, Callback<T>>,
}

impl<T> Observers<T> {
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
        }
    }

    /// Register a callback; it runs on every subsequent [`notify`](Self::notify)
    pub fn subscribe<F: FnMut(&T) + Send + 'static>(&mut self, callback: F) -> ObserverId {
        self.callbacks.insert(Box::new(callback))
    }

    /// Remove a callback. Returns false if the id was already removed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.callbacks.remove(id).is_some()
    }

    pub fn notify(&mut self, value: &T) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_notify_and_unsubscribe() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut observers = Observers::new();

        let sink = seen.clone();
        let id = observers.subscribe(move |v: &i32| sink.lock().unwrap().push(*v));
        assert_eq!(observers.len(), 1);

        observers.notify(&1);
        observers.notify(&2);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert!(observers.is_empty());

        observers.notify(&3);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
    }
}

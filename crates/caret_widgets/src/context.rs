//! Widget Context - widget registration, mount state, and dirty tracking
//!
//! The host owns one [`WidgetContext`] per UI tree. Widgets register
//! themselves on construction, report mount changes, and mark themselves
//! dirty whenever their rendered output changes. After painting, the host
//! drains the dirty set with [`take_dirty`](WidgetContext::take_dirty).

use rustc_hash::FxHashSet;
use slotmap::{Key, SlotMap};

use crate::widget::WidgetId;

/// Per-widget data stored in the context
#[derive(Debug, Default)]
struct WidgetData {
    mounted: bool,
}

/// Coordinates widget lifecycles and re-render requests
#[derive(Debug, Default)]
pub struct WidgetContext {
    widgets: SlotMap<WidgetId, WidgetData>,
    dirty: FxHashSet<WidgetId>,
}

impl WidgetContext {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Widget Registration
    // =========================================================================

    /// Register a new widget and get its ID
    pub fn register_widget(&mut self) -> WidgetId {
        self.widgets.insert(WidgetData::default())
    }

    pub fn unregister_widget(&mut self, id: WidgetId) {
        if self.widgets.remove(id).is_some() {
            self.dirty.remove(&id);
        }
    }

    pub fn is_registered(&self, id: WidgetId) -> bool {
        self.widgets.contains_key(id)
    }

    /// Number of registered widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Event target value addressing `id`
    pub fn target_of(&self, id: WidgetId) -> u64 {
        id.data().as_ffi()
    }

    // =========================================================================
    // Mount State
    // =========================================================================

    pub fn set_mounted(&mut self, id: WidgetId, mounted: bool) {
        if let Some(data) = self.widgets.get_mut(id) {
            data.mounted = mounted;
        }
    }

    pub fn is_mounted(&self, id: WidgetId) -> bool {
        self.widgets.get(id).is_some_and(|data| data.mounted)
    }

    // =========================================================================
    // Dirty Tracking
    // =========================================================================

    /// Mark a widget as needing re-render
    pub fn mark_dirty(&mut self, id: WidgetId) {
        if self.widgets.contains_key(id) {
            self.dirty.insert(id);
        }
    }

    pub fn is_dirty(&self, id: WidgetId) -> bool {
        self.dirty.contains(&id)
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Drain the widgets that need re-rendering
    pub fn take_dirty(&mut self) -> Vec<WidgetId> {
        self.dirty.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration() {
        let mut ctx = WidgetContext::new();
        let id = ctx.register_widget();
        assert!(ctx.is_registered(id));
        assert!(!ctx.is_mounted(id));

        ctx.unregister_widget(id);
        assert!(!ctx.is_registered(id));
        assert!(ctx.is_empty());
        // Stale ids are ignored
        ctx.set_mounted(id, true);
        ctx.mark_dirty(id);
        assert!(!ctx.is_mounted(id));
        assert!(!ctx.has_dirty());
    }

    #[test]
    fn test_dirty_tracking() {
        let mut ctx = WidgetContext::new();
        let a = ctx.register_widget();
        let b = ctx.register_widget();

        ctx.mark_dirty(a);
        ctx.mark_dirty(a);
        assert!(ctx.is_dirty(a));
        assert!(!ctx.is_dirty(b));

        assert_eq!(ctx.take_dirty(), vec![a]);
        assert!(!ctx.has_dirty());
    }

    #[test]
    fn test_targets_are_distinct() {
        let mut ctx = WidgetContext::new();
        let a = ctx.register_widget();
        let b = ctx.register_widget();
        assert_ne!(ctx.target_of(a), ctx.target_of(b));
        assert_ne!(ctx.target_of(a), 0);
    }
}

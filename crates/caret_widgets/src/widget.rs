//! Base widget trait and types

use caret_core::{DrawContext, Event, Rect};
use slotmap::new_key_type;

use crate::context::WidgetContext;

new_key_type! {
    pub struct WidgetId;
}

/// Base trait for all widgets
pub trait Widget {
    /// Get the widget's unique ID
    fn id(&self) -> WidgetId;

    /// Handle an event
    fn handle_event(&mut self, ctx: &mut WidgetContext, event: &Event);

    /// Draw into `bounds`
    fn paint(&self, ctx: &mut dyn DrawContext, bounds: Rect);
}

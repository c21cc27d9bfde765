//! Draw Context
//!
//! The [`DrawContext`] trait is the seam between widgets and whatever backend
//! rasterizes them. Widgets describe what to draw; the host decides how.
//!
//! [`RecordingContext`] captures the calls as [`DrawCommand`]s so a frame can
//! be replayed later, diffed, or asserted on in tests.
//!
//! # Example
//!
//! ```rust
//! use caret_core::{Color, CornerRadius, DrawContext, RecordingContext, Rect, Size};
//!
//! let mut ctx = RecordingContext::new(Size::new(200.0, 40.0));
//! ctx.push_opacity(0.5);
//! ctx.fill_rect(
//!     Rect::new(0.0, 0.0, 2.0, 18.0),
//!     CornerRadius::uniform(1.0),
//!     Color::BLACK.into(),
//! );
//! ctx.pop_opacity();
//!
//! assert_eq!(ctx.commands().len(), 3);
//! ```

use crate::geometry::{Brush, CornerRadius, Rect, Size};

/// Drawing operations available to widgets
pub trait DrawContext {
    /// Push an opacity value (multiplied with parent)
    fn push_opacity(&mut self, opacity: f32);

    /// Pop the top opacity from the stack
    fn pop_opacity(&mut self);

    /// Effective opacity after all pushes
    fn current_opacity(&self) -> f32;

    /// Fill a (possibly rounded) rectangle
    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush);

    /// Size of the surface being drawn into
    fn viewport_size(&self) -> Size;
}

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushOpacity(f32),
    PopOpacity,
    FillRect {
        rect: Rect,
        corner_radius: CornerRadius,
        brush: Brush,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    opacity_stack: Vec<f32>,
    viewport: Size,
}

impl RecordingContext {
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            opacity_stack: vec![1.0],
            viewport,
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the context empty
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Drop all recorded commands and reset the opacity stack
    pub fn clear(&mut self) {
        self.commands.clear();
        self.opacity_stack = vec![1.0];
    }
}

impl Default for RecordingContext {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl DrawContext for RecordingContext {
    fn push_opacity(&mut self, opacity: f32) {
        self.commands.push(DrawCommand::PushOpacity(opacity));
        let current = self.current_opacity();
        self.opacity_stack.push(current * opacity);
    }

    fn pop_opacity(&mut self) {
        self.commands.push(DrawCommand::PopOpacity);
        // The root entry stays so current_opacity is always defined
        if self.opacity_stack.len() > 1 {
            self.opacity_stack.pop();
        }
    }

    fn current_opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: CornerRadius, brush: Brush) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            corner_radius,
            brush,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

//! Caret Widget Library
//!
//! A blinking text-insertion caret: a thin rounded bar whose height follows
//! the font size, colored from the theme, blinking while idle and held solid
//! while the host reports typing.
//!
//! ```rust
//! use caret_core::{RecordingContext, Rect, Size};
//! use caret_widgets::{Caret, CaretConfig, WidgetContext};
//!
//! let mut ctx = WidgetContext::new();
//! let mut caret = Caret::new(&mut ctx, CaretConfig::new().size(24.0));
//!
//! caret.mount(&mut ctx);
//! assert!(caret.visible());
//!
//! let size = caret.measure();
//! assert_eq!(size.width, 2.0);
//!
//! let mut canvas = RecordingContext::new(Size::new(100.0, 40.0));
//! caret.paint(&mut canvas, Rect::new(10.0, 4.0, size.width, size.height));
//! assert_eq!(canvas.commands().len(), 3);
//! ```

pub mod caret;
pub mod context;
pub mod widget;

pub use caret::{caret_height, Caret, CaretConfig, CARET_WIDTH, DEFAULT_CARET_COLOR};
pub use context::WidgetContext;
pub use widget::{Widget, WidgetId};

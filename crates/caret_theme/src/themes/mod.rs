//! Built-in themes

mod caret;

pub use caret::CaretTheme;

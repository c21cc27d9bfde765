//! Design tokens for theming
//!
//! Only the tokens the caret reads:
//! - Colors
//! - Animation cadence

mod animation;
mod color;

pub use animation::*;
pub use color::*;

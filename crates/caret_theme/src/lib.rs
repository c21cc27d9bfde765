//! Caret Theme System
//!
//! Design tokens for the caret, light/dark theme bundles, a process-wide
//! [`ThemeState`] that widgets read at paint time, and TOML theme files.
//!
//! # Quick Start
//!
//! ```rust
//! use caret_theme::{CaretTheme, ColorScheme, ColorToken, ThemeState};
//!
//! let theme = ThemeState::new(CaretTheme::bundle(), ColorScheme::Dark);
//! let caret = theme.color(ColorToken::Caret);
//! assert_eq!(caret, theme.colors().caret);
//! assert_eq!(theme.blink_timing().period_ms(), 1032.0);
//! ```
//!
//! # Overrides
//!
//! Color overrides win over the active scheme's tokens and survive scheme
//! switches. Every change raises the repaint flag and fires the redraw
//! callback the host registered.

pub mod config;
pub mod error;
pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use config::{parse_hex_color, BlinkSection, ColorSection, ThemeConfig};
pub use error::ThemeError;
pub use state::ThemeState;
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use themes::CaretTheme;
pub use tokens::*;

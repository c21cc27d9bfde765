//! Theme error types

use thiserror::Error;

/// Errors loading or applying a theme file
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The file is not valid TOML or has the wrong shape
    #[error("Theme parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color is not `#RRGGBB` or `#RRGGBBAA`
    #[error("Invalid color for `{token}`: {value:?}")]
    InvalidColor { token: String, value: String },

    /// Unknown blink preset name
    #[error("Unknown blink preset: {0}")]
    UnknownPreset(String),

    /// A blink duration is negative or not finite
    #[error("Invalid blink duration for `{field}`: {value}")]
    InvalidDuration { field: &'static str, value: f32 },

    /// Failed to read the theme file
    #[error("Failed to read theme file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;

//! TOML theme files
//!
//! ```toml
//! scheme = "dark"
//!
//! [colors]
//! caret = "#FF5500"
//! background = "#1E1E2ECC"
//!
//! [blink]
//! preset = "classic"
//! hold_ms = 600
//! ```
//!
//! Every section is optional. Colors replace the token in both the light
//! and dark variants. Blink durations start from `preset` (default
//! `"modern"`) and then take any explicitly listed stage.

use std::path::Path;

use caret_animation::BlinkTiming;
use caret_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ThemeError};
use crate::state::ThemeState;
use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::themes::CaretTheme;
use crate::tokens::{AnimationTokens, ColorToken, ColorTokens};

/// A parsed theme file
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Theme name shown in diagnostics
    pub name: Option<String>,
    /// Initial color scheme
    pub scheme: Option<ColorScheme>,
    pub colors: ColorSection,
    pub blink: Option<BlinkSection>,
}

/// `[colors]`: hex strings keyed by token
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorSection {
    pub caret: Option<String>,
    pub accent: Option<String>,
    pub text_primary: Option<String>,
    pub background: Option<String>,
}

impl ColorSection {
    fn raw(&self, token: ColorToken) -> Option<&str> {
        match token {
            ColorToken::Caret => self.caret.as_deref(),
            ColorToken::Accent => self.accent.as_deref(),
            ColorToken::TextPrimary => self.text_primary.as_deref(),
            ColorToken::Background => self.background.as_deref(),
        }
    }

    /// Parse every color that is present
    pub fn resolve(&self) -> Result<Vec<(ColorToken, Color)>> {
        ColorToken::ALL
            .into_iter()
            .filter_map(|token| self.raw(token).map(|value| (token, value)))
            .map(|(token, value)| {
                parse_hex_color(value)
                    .map(|color| (token, color))
                    .ok_or_else(|| ThemeError::InvalidColor {
                        token: token.key().to_string(),
                        value: value.to_string(),
                    })
            })
            .collect()
    }
}

/// `[blink]`: a preset plus optional per-stage durations in milliseconds
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BlinkSection {
    pub preset: Option<String>,
    pub hold_ms: Option<f32>,
    pub fade_out_ms: Option<f32>,
    pub hidden_ms: Option<f32>,
    pub fade_in_ms: Option<f32>,
}

impl BlinkSection {
    pub fn to_timing(&self) -> Result<BlinkTiming> {
        let mut timing = match self.preset.as_deref() {
            None => BlinkTiming::modern(),
            Some(name) => BlinkTiming::preset(name)
                .ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))?,
        };

        let stages = [
            ("hold_ms", self.hold_ms, &mut timing.hold_ms),
            ("fade_out_ms", self.fade_out_ms, &mut timing.fade_out_ms),
            ("hidden_ms", self.hidden_ms, &mut timing.hidden_ms),
            ("fade_in_ms", self.fade_in_ms, &mut timing.fade_in_ms),
        ];
        for (field, value, slot) in stages {
            if let Some(value) = value {
                if !value.is_finite() || value < 0.0 {
                    return Err(ThemeError::InvalidDuration { field, value });
                }
                *slot = value;
            }
        }

        Ok(timing)
    }
}

impl ThemeConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!("loaded theme file {}", path.display());
        Ok(config)
    }

    /// Blink cadence from `[blink]`, or the default
    pub fn blink_timing(&self) -> Result<BlinkTiming> {
        match &self.blink {
            Some(section) => section.to_timing(),
            None => Ok(BlinkTiming::default()),
        }
    }

    /// Build a light/dark bundle from the built-in theme plus this file
    pub fn to_bundle(&self) -> Result<ThemeBundle> {
        let overrides = self.colors.resolve()?;
        let animations = AnimationTokens {
            caret_blink: self.blink_timing()?,
        };
        let name = self.name.clone().unwrap_or_else(|| "Custom".to_string());

        let variant = |base: CaretTheme| {
            let mut colors: ColorTokens = base.colors().clone();
            for (token, color) in &overrides {
                colors.set(*token, *color);
            }
            CaretTheme::custom(name.clone(), base.color_scheme(), colors, animations)
        };

        Ok(ThemeBundle::new(
            name.clone(),
            variant(CaretTheme::light()),
            variant(CaretTheme::dark()),
        ))
    }

    /// Apply to a running theme as overrides.
    ///
    /// Everything is validated before anything changes, so a bad file
    /// leaves the theme untouched.
    pub fn apply(&self, state: &ThemeState) -> Result<()> {
        let overrides = self.colors.resolve()?;
        let timing = match &self.blink {
            Some(section) => Some(section.to_timing()?),
            None => None,
        };

        if let Some(scheme) = self.scheme {
            state.set_scheme(scheme);
        }
        for (token, color) in overrides {
            state.set_color_override(token, color);
        }
        if let Some(timing) = timing {
            state.set_blink_timing(timing);
        }
        Ok(())
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional)
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let packed = u32::from_str_radix(hex, 16).ok()?;

    match hex.len() {
        6 => Some(Color::from_hex(packed)),
        8 => Some(Color::from_hex(packed >> 8).with_alpha((packed & 0xFF) as f32 / 255.0)),
        _ => None,
    }
}

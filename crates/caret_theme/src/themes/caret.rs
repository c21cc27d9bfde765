//! Default caret theme

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;

/// Default theme, also the base that theme files customize
#[derive(Clone, Debug)]
pub struct CaretTheme {
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    animations: AnimationTokens,
}

impl CaretTheme {
    pub fn light() -> Self {
        Self::custom(
            "Caret",
            ColorScheme::Light,
            ColorTokens::light(),
            AnimationTokens::default(),
        )
    }

    pub fn dark() -> Self {
        Self::custom(
            "Caret",
            ColorScheme::Dark,
            ColorTokens::dark(),
            AnimationTokens::default(),
        )
    }

    /// Build a theme from explicit tokens
    pub fn custom(
        name: impl Into<String>,
        scheme: ColorScheme,
        colors: ColorTokens,
        animations: AnimationTokens,
    ) -> Self {
        Self {
            name: name.into(),
            scheme,
            colors,
            animations,
        }
    }

    /// Create a theme bundle with light and dark variants
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("Caret", Self::light(), Self::dark())
    }
}

impl Theme for CaretTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    fn animations(&self) -> &AnimationTokens {
        &self.animations
    }
}

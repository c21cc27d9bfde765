//! Color tokens for theming

use caret_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    /// Insertion point fill
    Caret,
    Accent,
    TextPrimary,
    Background,
}

impl ColorToken {
    pub const ALL: [ColorToken; 4] = [
        ColorToken::Caret,
        ColorToken::Accent,
        ColorToken::TextPrimary,
        ColorToken::Background,
    ];

    /// Key used for this token in theme files
    pub fn key(self) -> &'static str {
        match self {
            ColorToken::Caret => "caret",
            ColorToken::Accent => "accent",
            ColorToken::TextPrimary => "text_primary",
            ColorToken::Background => "background",
        }
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    pub caret: Color,
    pub accent: Color,
    pub text_primary: Color,
    pub background: Color,
}

impl ColorTokens {
    /// Light palette: blue caret on a pale background
    pub fn light() -> Self {
        Self {
            caret: Color::from_hex(0x1E66F5),
            accent: Color::from_hex(0x1E66F5),
            text_primary: Color::from_hex(0x4C4F69),
            background: Color::from_hex(0xEFF1F5),
        }
    }

    /// Dark palette
    pub fn dark() -> Self {
        Self {
            caret: Color::from_hex(0x89B4FA),
            accent: Color::from_hex(0x89B4FA),
            text_primary: Color::from_hex(0xCDD6F4),
            background: Color::from_hex(0x1E1E2E),
        }
    }

    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Caret => self.caret,
            ColorToken::Accent => self.accent,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::Background => self.background,
        }
    }

    /// Replace a color by token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        match token {
            ColorToken::Caret => self.caret = color,
            ColorToken::Accent => self.accent = color,
            ColorToken::TextPrimary => self.text_primary = color,
            ColorToken::Background => self.background = color,
        }
    }

    /// Linear interpolation between two color token sets
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            caret: Color::lerp(&from.caret, &to.caret, t),
            accent: Color::lerp(&from.accent, &to.accent, t),
            text_primary: Color::lerp(&from.text_primary, &to.text_primary, t),
            background: Color::lerp(&from.background, &to.background, t),
        }
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        Self::light()
    }
}

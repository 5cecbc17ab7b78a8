//! Color tokens for theming

use kiln_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Brand fills
    Primary,
    PrimaryShade,
    Destructive,
    DestructiveShade,
    TextOnFill,

    // Surface colors
    Background,
    Surface,
    SurfaceElevated,

    // Text colors
    TextPrimary,
    TextSecondary,
    TextTertiary,

    // Border colors
    Border,
    BorderSecondary,
    BorderFocus,

    // Tooltip colors (inverted colors)
    TooltipBackground,
    TooltipText,
}

impl ColorToken {
    /// Every color token, in declaration order.
    pub fn all() -> &'static [ColorToken] {
        const TOKENS: [ColorToken; 16] = [
            ColorToken::Primary,
            ColorToken::PrimaryShade,
            ColorToken::Destructive,
            ColorToken::DestructiveShade,
            ColorToken::TextOnFill,
            ColorToken::Background,
            ColorToken::Surface,
            ColorToken::SurfaceElevated,
            ColorToken::TextPrimary,
            ColorToken::TextSecondary,
            ColorToken::TextTertiary,
            ColorToken::Border,
            ColorToken::BorderSecondary,
            ColorToken::BorderFocus,
            ColorToken::TooltipBackground,
            ColorToken::TooltipText,
        ];
        &TOKENS
    }

    /// Stable kebab-case id used in theme config files.
    pub fn id(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::PrimaryShade => "primary-shade",
            Self::Destructive => "destructive",
            Self::DestructiveShade => "destructive-shade",
            Self::TextOnFill => "text-on-fill",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::SurfaceElevated => "surface-elevated",
            Self::TextPrimary => "text-primary",
            Self::TextSecondary => "text-secondary",
            Self::TextTertiary => "text-tertiary",
            Self::Border => "border",
            Self::BorderSecondary => "border-secondary",
            Self::BorderFocus => "border-focus",
            Self::TooltipBackground => "tooltip-background",
            Self::TooltipText => "tooltip-text",
        }
    }

    /// Look a token up by its config id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|token| token.id() == id)
    }
}

/// Complete set of semantic color tokens
#[derive(Clone, Debug, PartialEq)]
pub struct ColorTokens {
    // Brand fills
    pub primary: Color,
    pub primary_shade: Color,
    pub destructive: Color,
    pub destructive_shade: Color,
    pub text_on_fill: Color,

    // Surface colors
    pub background: Color,
    pub surface: Color,
    pub surface_elevated: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Border colors
    pub border: Color,
    pub border_secondary: Color,
    pub border_focus: Color,

    // Tooltip colors (inverted colors)
    pub tooltip_bg: Color,
    pub tooltip_text: Color,
}

impl ColorTokens {
    /// Get a color by token key
    pub fn get(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Primary => self.primary,
            ColorToken::PrimaryShade => self.primary_shade,
            ColorToken::Destructive => self.destructive,
            ColorToken::DestructiveShade => self.destructive_shade,
            ColorToken::TextOnFill => self.text_on_fill,
            ColorToken::Background => self.background,
            ColorToken::Surface => self.surface,
            ColorToken::SurfaceElevated => self.surface_elevated,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::TextTertiary => self.text_tertiary,
            ColorToken::Border => self.border,
            ColorToken::BorderSecondary => self.border_secondary,
            ColorToken::BorderFocus => self.border_focus,
            ColorToken::TooltipBackground => self.tooltip_bg,
            ColorToken::TooltipText => self.tooltip_text,
        }
    }

    /// Replace the color behind a token key
    pub fn set(&mut self, token: ColorToken, color: Color) {
        let slot = match token {
            ColorToken::Primary => &mut self.primary,
            ColorToken::PrimaryShade => &mut self.primary_shade,
            ColorToken::Destructive => &mut self.destructive,
            ColorToken::DestructiveShade => &mut self.destructive_shade,
            ColorToken::TextOnFill => &mut self.text_on_fill,
            ColorToken::Background => &mut self.background,
            ColorToken::Surface => &mut self.surface,
            ColorToken::SurfaceElevated => &mut self.surface_elevated,
            ColorToken::TextPrimary => &mut self.text_primary,
            ColorToken::TextSecondary => &mut self.text_secondary,
            ColorToken::TextTertiary => &mut self.text_tertiary,
            ColorToken::Border => &mut self.border,
            ColorToken::BorderSecondary => &mut self.border_secondary,
            ColorToken::BorderFocus => &mut self.border_focus,
            ColorToken::TooltipBackground => &mut self.tooltip_bg,
            ColorToken::TooltipText => &mut self.tooltip_text,
        };
        *slot = color;
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        // Default to the dark palette
        Self {
            primary: Color::from_hex(0x3274D9),
            primary_shade: Color::from_hex(0x1F60C4),
            destructive: Color::from_hex(0xE02F44),
            destructive_shade: Color::from_hex(0xC4162A),
            text_on_fill: Color::WHITE,
            background: Color::from_hex(0x0B0C0E),
            surface: Color::from_hex(0x141619),
            surface_elevated: Color::from_hex(0x202226),
            text_primary: Color::from_hex(0xC7D0D9),
            text_secondary: Color::from_hex(0x8E8E8E),
            text_tertiary: Color::from_hex(0x464C54),
            border: Color::from_hex(0x202226),
            border_secondary: Color::from_hex(0x2C3235),
            border_focus: Color::from_hex(0x5794F2),
            tooltip_bg: Color::from_hex(0x2C3235),
            tooltip_text: Color::from_hex(0xD8D9DA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_ids_round_trip() {
        for token in ColorToken::all() {
            assert_eq!(ColorToken::from_id(token.id()), Some(*token));
        }
        assert_eq!(ColorToken::from_id("chartreuse"), None);
    }

    #[test]
    fn test_set_then_get() {
        let mut colors = ColorTokens::default();
        colors.set(ColorToken::BorderSecondary, Color::WHITE);
        assert_eq!(colors.get(ColorToken::BorderSecondary), Color::WHITE);
    }
}

//! Default Kiln theme
//!
//! A neutral gray dark theme with a blue brand fill and a red destructive
//! fill, plus a light counterpart using the same brand colors.

use kiln_core::Color;

use crate::theme::{ColorScheme, Theme, ThemeBundle};
use crate::tokens::*;

/// Dark palette
pub mod dark {
    use kiln_core::Color;

    pub const BLACK: Color = Color::rgb(11.0 / 255.0, 12.0 / 255.0, 14.0 / 255.0);
    pub const DARK_2: Color = Color::rgb(20.0 / 255.0, 22.0 / 255.0, 25.0 / 255.0);
    pub const DARK_4: Color = Color::rgb(32.0 / 255.0, 34.0 / 255.0, 38.0 / 255.0);
    pub const DARK_6: Color = Color::rgb(44.0 / 255.0, 50.0 / 255.0, 53.0 / 255.0);
    pub const GRAY_1: Color = Color::rgb(85.0 / 255.0, 85.0 / 255.0, 85.0 / 255.0);
    pub const GRAY_2: Color = Color::rgb(142.0 / 255.0, 142.0 / 255.0, 142.0 / 255.0);
    pub const GRAY_4: Color = Color::rgb(216.0 / 255.0, 217.0 / 255.0, 218.0 / 255.0);
    pub const GRAY_5: Color = Color::rgb(199.0 / 255.0, 208.0 / 255.0, 217.0 / 255.0);
}

/// Light palette
pub mod light {
    use kiln_core::Color;

    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_98: Color = Color::rgb(247.0 / 255.0, 248.0 / 255.0, 250.0 / 255.0);
    pub const GRAY_95: Color = Color::rgb(233.0 / 255.0, 237.0 / 255.0, 242.0 / 255.0);
    pub const GRAY_85: Color = Color::rgb(199.0 / 255.0, 208.0 / 255.0, 217.0 / 255.0);
    pub const GRAY_33: Color = Color::rgb(70.0 / 255.0, 76.0 / 255.0, 84.0 / 255.0);
    pub const GRAY_25: Color = Color::rgb(52.0 / 255.0, 55.0 / 255.0, 65.0 / 255.0);
    pub const GRAY_15: Color = Color::rgb(32.0 / 255.0, 34.0 / 255.0, 38.0 / 255.0);
}

/// Brand colors shared by both schemes
mod brand {
    use kiln_core::Color;

    pub const BLUE_BASE: Color = Color::rgb(50.0 / 255.0, 116.0 / 255.0, 217.0 / 255.0);
    pub const BLUE_SHADE: Color = Color::rgb(31.0 / 255.0, 96.0 / 255.0, 196.0 / 255.0);
    pub const BLUE_FOCUS: Color = Color::rgb(87.0 / 255.0, 148.0 / 255.0, 242.0 / 255.0);
    pub const RED_BASE: Color = Color::rgb(224.0 / 255.0, 47.0 / 255.0, 68.0 / 255.0);
    pub const RED_SHADE: Color = Color::rgb(196.0 / 255.0, 22.0 / 255.0, 42.0 / 255.0);
}

/// Default Kiln theme
///
/// Also serves as the concrete theme type for presets, config-built
/// themes and [`ThemeState`](crate::ThemeState) snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct KilnTheme {
    name: String,
    scheme: ColorScheme,
    colors: ColorTokens,
    spacing: SpacingTokens,
    heights: HeightTokens,
    radii: RadiusTokens,
}

impl KilnTheme {
    pub fn new(
        name: impl Into<String>,
        scheme: ColorScheme,
        colors: ColorTokens,
        spacing: SpacingTokens,
        heights: HeightTokens,
        radii: RadiusTokens,
    ) -> Self {
        Self {
            name: name.into(),
            scheme,
            colors,
            spacing,
            heights,
            radii,
        }
    }

    /// Create the dark variant
    pub fn dark() -> Self {
        Self::new(
            "Kiln Dark",
            ColorScheme::Dark,
            ColorTokens {
                primary: brand::BLUE_BASE,
                primary_shade: brand::BLUE_SHADE,
                destructive: brand::RED_BASE,
                destructive_shade: brand::RED_SHADE,
                text_on_fill: Color::WHITE,
                background: dark::BLACK,
                surface: dark::DARK_2,
                surface_elevated: dark::DARK_4,
                text_primary: dark::GRAY_5,
                text_secondary: dark::GRAY_2,
                text_tertiary: dark::GRAY_1,
                border: dark::DARK_4,
                border_secondary: dark::DARK_6,
                border_focus: brand::BLUE_FOCUS,
                tooltip_bg: dark::DARK_6,
                tooltip_text: dark::GRAY_4,
            },
            SpacingTokens::default(),
            HeightTokens::default(),
            RadiusTokens::default(),
        )
    }

    /// Create the light variant
    pub fn light() -> Self {
        Self::new(
            "Kiln Light",
            ColorScheme::Light,
            ColorTokens {
                primary: brand::BLUE_BASE,
                primary_shade: brand::BLUE_SHADE,
                destructive: brand::RED_BASE,
                destructive_shade: brand::RED_SHADE,
                text_on_fill: Color::WHITE,
                background: light::GRAY_98,
                surface: light::WHITE,
                surface_elevated: light::GRAY_98,
                text_primary: light::GRAY_15,
                text_secondary: light::GRAY_33,
                text_tertiary: light::GRAY_85,
                border: light::GRAY_95,
                border_secondary: light::GRAY_85,
                border_focus: brand::BLUE_FOCUS,
                // Tooltip (inverted for light theme)
                tooltip_bg: light::GRAY_25,
                tooltip_text: light::GRAY_98,
            },
            SpacingTokens::default(),
            HeightTokens::default(),
            RadiusTokens::default(),
        )
    }

    /// Light/dark bundle of the default theme
    pub fn bundle() -> ThemeBundle {
        ThemeBundle::new("Kiln", Self::light(), Self::dark())
    }

    /// Copy the tokens of any theme into an owned `KilnTheme`
    pub fn from_theme(theme: &dyn Theme) -> Self {
        Self::new(
            theme.name(),
            theme.color_scheme(),
            theme.colors().clone(),
            theme.spacing().clone(),
            theme.heights().clone(),
            theme.radii().clone(),
        )
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn colors_mut(&mut self) -> &mut ColorTokens {
        &mut self.colors
    }

    pub fn spacing_mut(&mut self) -> &mut SpacingTokens {
        &mut self.spacing
    }

    pub fn heights_mut(&mut self) -> &mut HeightTokens {
        &mut self.heights
    }

    pub fn radii_mut(&mut self) -> &mut RadiusTokens {
        &mut self.radii
    }
}

impl Default for KilnTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme for KilnTheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn color_scheme(&self) -> ColorScheme {
        self.scheme
    }

    fn colors(&self) -> &ColorTokens {
        &self.colors
    }

    fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    fn heights(&self) -> &HeightTokens {
        &self.heights
    }

    fn radii(&self) -> &RadiusTokens {
        &self.radii
    }
}

//! Built-in theme presets.

use std::fmt::{Display, Formatter};

use kiln_core::Color;

use crate::theme::{ColorScheme, ThemeBundle};
use crate::themes::KilnTheme;
use crate::tokens::*;

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// Default Kiln gray theme.
    Kiln,
    /// Cooler slate preset with rounder corners.
    Slate,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Kiln => "kiln",
            Self::Slate => "slate",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Kiln => "Kiln",
            Self::Slate => "Slate",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 2] = [ThemePreset::Kiln, ThemePreset::Slate];
        &PRESETS
    }

    /// Look a preset up by its id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|preset| preset.id() == id)
    }

    /// Build a light/dark theme bundle for this preset.
    pub fn bundle(self) -> ThemeBundle {
        match self {
            Self::Kiln => KilnTheme::bundle(),
            Self::Slate => slate_bundle(),
        }
    }

    /// Owned theme for one scheme of this preset.
    pub fn theme(self, scheme: ColorScheme) -> KilnTheme {
        KilnTheme::from_theme(self.bundle().for_scheme(scheme))
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_bundle(preset: ThemePreset) -> ThemeBundle {
    preset.bundle()
}

fn slate_radii() -> RadiusTokens {
    RadiusTokens {
        radius_sm: 4.0,
        radius_md: 6.0,
        radius_lg: 8.0,
    }
}

fn slate_bundle() -> ThemeBundle {
    let light = KilnTheme::new(
        "Slate Light",
        ColorScheme::Light,
        ColorTokens {
            primary: Color::from_hex(0x0F172A),
            primary_shade: Color::from_hex(0x1E293B),
            destructive: Color::from_hex(0xEF4444),
            destructive_shade: Color::from_hex(0xDC2626),
            text_on_fill: Color::from_hex(0xF8FAFC),
            background: Color::WHITE,
            surface: Color::WHITE,
            surface_elevated: Color::from_hex(0xF1F5F9),
            text_primary: Color::from_hex(0x020817),
            text_secondary: Color::from_hex(0x64748B),
            text_tertiary: Color::from_hex(0x94A3B8),
            border: Color::from_hex(0xE2E8F0),
            border_secondary: Color::from_hex(0xCBD5E1),
            border_focus: Color::from_hex(0x94A3B8),
            tooltip_bg: Color::from_hex(0x0F172A),
            tooltip_text: Color::from_hex(0xF8FAFC),
        },
        SpacingTokens::default(),
        HeightTokens::default(),
        slate_radii(),
    );

    let dark = KilnTheme::new(
        "Slate Dark",
        ColorScheme::Dark,
        ColorTokens {
            primary: Color::from_hex(0xF8FAFC),
            primary_shade: Color::from_hex(0xE2E8F0),
            destructive: Color::from_hex(0x7F1D1D),
            destructive_shade: Color::from_hex(0x991B1B),
            text_on_fill: Color::from_hex(0x0F172A),
            background: Color::from_hex(0x020817),
            surface: Color::from_hex(0x0F172A),
            surface_elevated: Color::from_hex(0x1E293B),
            text_primary: Color::from_hex(0xF8FAFC),
            text_secondary: Color::from_hex(0x94A3B8),
            text_tertiary: Color::from_hex(0x475569),
            border: Color::from_hex(0x1E293B),
            border_secondary: Color::from_hex(0x334155),
            border_focus: Color::from_hex(0xCBD5E1),
            tooltip_bg: Color::from_hex(0xF8FAFC),
            tooltip_text: Color::from_hex(0x0F172A),
        },
        SpacingTokens::default(),
        HeightTokens::default(),
        slate_radii(),
    );

    ThemeBundle::new("Slate", light, dark)
}

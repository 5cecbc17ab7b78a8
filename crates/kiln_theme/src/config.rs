//! Theme configuration file handling
//!
//! A theme config picks a preset and scheme, then overrides individual
//! tokens by id:
//!
//! ```toml
//! preset = "slate"
//! scheme = "light"
//!
//! [colors]
//! primary = "#3274d9"
//! border-secondary = "#2c3235"
//!
//! [spacing]
//! sm = 10
//!
//! [radii]
//! sm = 4
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use kiln_core::Color;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::presets::ThemePreset;
use crate::theme::{ColorScheme, ThemeBundle};
use crate::themes::KilnTheme;
use crate::tokens::*;

/// Top-level theme configuration (kiln-theme.toml)
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(default = "default_preset")]
    pub preset: String,
    #[serde(default)]
    pub scheme: ColorScheme,
    /// Color overrides keyed by token id, as hex strings
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default)]
    pub spacing: BTreeMap<String, f32>,
    #[serde(default)]
    pub heights: BTreeMap<String, f32>,
    #[serde(default)]
    pub radii: BTreeMap<String, f32>,
}

fn default_preset() -> String {
    ThemePreset::Kiln.id().to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            scheme: ColorScheme::default(),
            colors: BTreeMap::new(),
            spacing: BTreeMap::new(),
            heights: BTreeMap::new(),
            radii: BTreeMap::new(),
        }
    }
}

impl ThemeConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(source: &str) -> Result<Self, ThemeError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        tracing::debug!("loading theme config from {}", path.display());
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// The preset this config starts from
    pub fn preset(&self) -> Result<ThemePreset, ThemeError> {
        ThemePreset::from_id(&self.preset)
            .ok_or_else(|| ThemeError::UnknownPreset(self.preset.clone()))
    }

    /// Apply every token override to `theme`
    ///
    /// Either all overrides apply or, on the first invalid entry, an error is
    /// returned and `theme` is left untouched.
    pub fn apply(&self, theme: &mut KilnTheme) -> Result<(), ThemeError> {
        let mut patched = theme.clone();

        for (id, value) in &self.colors {
            let token = ColorToken::from_id(id).ok_or_else(|| ThemeError::UnknownToken {
                kind: "color",
                id: id.clone(),
            })?;
            let color = Color::from_hex_str(value).map_err(|source| ThemeError::InvalidColor {
                token: id.clone(),
                source,
            })?;
            patched.colors_mut().set(token, color);
        }

        for (id, value) in &self.spacing {
            let token = SpacingToken::from_id(id).ok_or_else(|| unknown("spacing", id))?;
            patched.spacing_mut().set(token, *value);
        }

        for (id, value) in &self.heights {
            let token = HeightToken::from_id(id).ok_or_else(|| unknown("height", id))?;
            patched.heights_mut().set(token, *value);
        }

        for (id, value) in &self.radii {
            let token = RadiusToken::from_id(id).ok_or_else(|| unknown("radius", id))?;
            patched.radii_mut().set(token, *value);
        }

        *theme = patched;
        Ok(())
    }

    /// Build the light/dark bundle described by this config
    pub fn bundle(&self) -> Result<ThemeBundle, ThemeError> {
        let preset = self.preset()?;

        let mut light = preset.theme(ColorScheme::Light);
        let mut dark = preset.theme(ColorScheme::Dark);
        self.apply(&mut light)?;
        self.apply(&mut dark)?;

        tracing::debug!(
            preset = preset.id(),
            colors = self.colors.len(),
            "built theme bundle from config"
        );
        Ok(ThemeBundle::new(preset.display_name(), light, dark))
    }
}

fn unknown(kind: &'static str, id: &str) -> ThemeError {
    ThemeError::UnknownToken {
        kind,
        id: id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_defaults() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.preset().unwrap(), ThemePreset::Kiln);
        assert_eq!(config.scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_overrides_apply_to_both_schemes() {
        let config = ThemeConfig::from_toml_str(
            r##"
            preset = "slate"

            [colors]
            primary = "#ff0000"

            [spacing]
            sm = 10

            [heights]
            md = 36.0
            "##,
        )
        .unwrap();

        let bundle = config.bundle().unwrap();
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let theme = bundle.for_scheme(scheme);
            assert_eq!(theme.colors().primary, Color::from_hex(0xFF0000));
            assert_eq!(theme.spacing().sm, 10.0);
            assert_eq!(theme.heights().md, 36.0);
            assert_eq!(theme.radii().radius_sm, 4.0);
        }
    }

    #[test]
    fn test_unknown_preset() {
        let config = ThemeConfig::from_toml_str("preset = \"mauve\"").unwrap();
        assert!(matches!(config.bundle(), Err(ThemeError::UnknownPreset(id)) if id == "mauve"));
    }

    #[test]
    fn test_unknown_token_leaves_theme_untouched() {
        let config = ThemeConfig::from_toml_str(
            r##"
            [colors]
            primary = "#ff0000"
            sparkle = "#00ff00"
            "##,
        )
        .unwrap();

        let mut theme = KilnTheme::dark();
        let err = config.apply(&mut theme).unwrap_err();
        assert!(matches!(err, ThemeError::UnknownToken { kind: "color", .. }));
        assert_eq!(theme, KilnTheme::dark());
    }

    #[test]
    fn test_invalid_color() {
        let config = ThemeConfig::from_toml_str("[colors]\nsurface = \"blue\"").unwrap();
        let err = config.bundle().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidColor { ref token, .. } if token == "surface"));
        assert!(err.to_string().contains("surface"));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ThemeConfig::from_toml_str("preset = "),
            Err(ThemeError::Toml(_))
        ));
    }
}

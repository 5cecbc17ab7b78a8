//! Theme trait and light/dark bundles

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::tokens::*;

/// Light or dark color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    #[default]
    Dark,
}

impl ColorScheme {
    /// The opposite scheme
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Read-only access to a complete set of design tokens
///
/// Components never hold on to a theme between renders; they read the
/// tokens they need, build their styles, and drop the reference.
pub trait Theme: Send + Sync + fmt::Debug {
    /// Human-readable theme name
    fn name(&self) -> &str;

    /// Which scheme this theme renders
    fn color_scheme(&self) -> ColorScheme;

    fn colors(&self) -> &ColorTokens;

    fn spacing(&self) -> &SpacingTokens;

    fn heights(&self) -> &HeightTokens;

    fn radii(&self) -> &RadiusTokens;

    fn is_dark(&self) -> bool {
        self.color_scheme() == ColorScheme::Dark
    }
}

/// A named light/dark pair of themes
#[derive(Clone, Debug)]
pub struct ThemeBundle {
    name: String,
    light: Arc<dyn Theme>,
    dark: Arc<dyn Theme>,
}

impl ThemeBundle {
    pub fn new(
        name: impl Into<String>,
        light: impl Theme + 'static,
        dark: impl Theme + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            light: Arc::new(light),
            dark: Arc::new(dark),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theme for a given scheme
    pub fn for_scheme(&self, scheme: ColorScheme) -> &dyn Theme {
        match scheme {
            ColorScheme::Light => self.light.as_ref(),
            ColorScheme::Dark => self.dark.as_ref(),
        }
    }
}

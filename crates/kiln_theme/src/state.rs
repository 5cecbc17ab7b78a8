//! Global theme state singleton
//!
//! Components read the active theme through [`ThemeState::snapshot`], which
//! returns an owned copy with every runtime override folded in. A render
//! therefore never observes a theme that changes underneath it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{OnceLock, RwLock};

use kiln_core::Color;
use rustc_hash::FxHashMap;

use crate::config::ThemeConfig;
use crate::error::ThemeError;
use crate::theme::{ColorScheme, ThemeBundle};
use crate::themes::KilnTheme;
use crate::tokens::*;

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global theme state - read by components during render
pub struct ThemeState {
    /// The current theme bundle (light/dark pair)
    bundle: RwLock<ThemeBundle>,

    /// Current color scheme
    scheme: RwLock<ColorScheme>,

    /// Dynamic color overrides
    color_overrides: RwLock<FxHashMap<ColorToken, Color>>,

    /// Dynamic spacing overrides
    spacing_overrides: RwLock<FxHashMap<SpacingToken, f32>>,

    /// Set whenever the effective tokens change; cleared by the host
    needs_repaint: AtomicBool,
}

impl ThemeState {
    fn new(bundle: ThemeBundle, scheme: ColorScheme) -> Self {
        Self {
            bundle: RwLock::new(bundle),
            scheme: RwLock::new(scheme),
            color_overrides: RwLock::new(FxHashMap::default()),
            spacing_overrides: RwLock::new(FxHashMap::default()),
            needs_repaint: AtomicBool::new(false),
        }
    }

    /// Initialize the global theme state (call once at app startup)
    ///
    /// Later calls are ignored; the first bundle wins.
    pub fn init(bundle: ThemeBundle, scheme: ColorScheme) {
        let name = bundle.name().to_string();
        if THEME_STATE.set(Self::new(bundle, scheme)).is_err() {
            tracing::debug!("ThemeState already initialized, ignoring bundle {name}");
        }
    }

    /// Initialize with the default Kiln bundle in dark mode
    pub fn init_default() {
        Self::init(KilnTheme::bundle(), ColorScheme::Dark);
    }

    /// Initialize from a parsed theme config
    pub fn init_from_config(config: &ThemeConfig) -> Result<(), ThemeError> {
        let bundle = config.bundle()?;
        Self::init(bundle, config.scheme);
        Ok(())
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Color Scheme ==========

    /// Get the current color scheme
    pub fn scheme(&self) -> ColorScheme {
        *self.scheme.read().unwrap()
    }

    /// Set the color scheme
    pub fn set_scheme(&self, scheme: ColorScheme) {
        let mut current = self.scheme.write().unwrap();
        if *current != scheme {
            tracing::debug!(
                "ThemeState::set_scheme - switching from {:?} to {:?}",
                *current,
                scheme
            );
            *current = scheme;
            self.needs_repaint.store(true, Ordering::Release);
        }
    }

    /// Flip between light and dark
    pub fn toggle_scheme(&self) {
        let next = self.scheme().toggle();
        self.set_scheme(next);
    }

    /// Replace the bundle, keeping the current scheme and overrides
    pub fn set_bundle(&self, bundle: ThemeBundle) {
        tracing::debug!("ThemeState::set_bundle - {}", bundle.name());
        *self.bundle.write().unwrap() = bundle;
        self.needs_repaint.store(true, Ordering::Release);
    }

    // ========== Token Access ==========

    /// Effective color for a token (override or theme value)
    pub fn color(&self, token: ColorToken) -> Color {
        if let Some(color) = self.color_overrides.read().unwrap().get(&token) {
            return *color;
        }
        let bundle = self.bundle.read().unwrap();
        bundle.for_scheme(self.scheme()).colors().get(token)
    }

    /// Effective spacing value for a token (override or theme value)
    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        if let Some(value) = self.spacing_overrides.read().unwrap().get(&token) {
            return *value;
        }
        let bundle = self.bundle.read().unwrap();
        bundle.for_scheme(self.scheme()).spacing().get(token)
    }

    /// Owned copy of the active theme with every override applied
    pub fn snapshot(&self) -> KilnTheme {
        let mut theme = {
            let bundle = self.bundle.read().unwrap();
            KilnTheme::from_theme(bundle.for_scheme(self.scheme()))
        };

        for (token, color) in self.color_overrides.read().unwrap().iter() {
            theme.colors_mut().set(*token, *color);
        }
        for (token, value) in self.spacing_overrides.read().unwrap().iter() {
            theme.spacing_mut().set(*token, *value);
        }
        theme
    }

    // ========== Dynamic Overrides ==========

    /// Override a color (repaint only)
    pub fn set_color_override(&self, token: ColorToken, color: Color) {
        self.color_overrides.write().unwrap().insert(token, color);
        self.needs_repaint.store(true, Ordering::Release);
    }

    /// Override a spacing value
    pub fn set_spacing_override(&self, token: SpacingToken, value: f32) {
        self.spacing_overrides.write().unwrap().insert(token, value);
        self.needs_repaint.store(true, Ordering::Release);
    }

    /// Remove a single color override
    pub fn remove_color_override(&self, token: ColorToken) {
        if self.color_overrides.write().unwrap().remove(&token).is_some() {
            self.needs_repaint.store(true, Ordering::Release);
        }
    }

    /// Clear all overrides
    pub fn clear_overrides(&self) {
        self.color_overrides.write().unwrap().clear();
        self.spacing_overrides.write().unwrap().clear();
        self.needs_repaint.store(true, Ordering::Release);
    }

    /// Check and clear the repaint flag
    pub fn take_needs_repaint(&self) -> bool {
        self.needs_repaint.swap(false, Ordering::AcqRel)
    }
}

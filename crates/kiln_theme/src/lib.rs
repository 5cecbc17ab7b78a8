//! Kiln Theme System
//!
//! Design tokens, light/dark theme bundles and a global theme state that
//! components read at render time.
//!
//! # Quick Start
//!
//! ```rust
//! use kiln_theme::{ColorToken, Theme, ThemeState};
//!
//! // Initialize theme at app startup
//! ThemeState::init_default();
//!
//! // Take a snapshot for one render pass
//! let theme = ThemeState::get().snapshot();
//! let border = theme.colors().get(ColorToken::BorderSecondary);
//! let padding = theme.spacing().sm;
//! # let _ = (border, padding);
//! ```
//!
//! # Tokens
//!
//! - [`ColorTokens`]: Semantic colors (surfaces, text, borders, brand fills)
//! - [`SpacingTokens`]: Spacing scale
//! - [`HeightTokens`]: Fixed control heights
//! - [`RadiusTokens`]: Border radii
//!
//! # Variants
//!
//! [`variant_properties`] maps a [`ButtonVariant`] to the border color and
//! fill treatment it uses under a theme.
//!
//! # Configuration
//!
//! [`ThemeConfig`] loads a preset plus token overrides from TOML.

pub mod config;
pub mod error;
pub mod mixins;
pub mod presets;
pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;
pub mod variant;

// Re-export commonly used types
pub use config::ThemeConfig;
pub use error::ThemeError;
pub use mixins::hover_color;
pub use presets::{preset_bundle, ThemePreset};
pub use state::ThemeState;
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use themes::KilnTheme;
pub use tokens::*;
pub use variant::{variant_properties, ButtonVariant, FillTreatment, VariantProperties};

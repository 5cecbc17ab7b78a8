//! Kiln Component Library
//!
//! Themed components that render to [`kiln_layout`] trees.
//!
//! # Example
//!
//! ```
//! use kiln_cn::prelude::*;
//!
//! ThemeState::init_default();
//!
//! let node = cn::toolbar_button()
//!     .icon("sync")
//!     .label("Refresh")
//!     .is_open(false)
//!     .render();
//!
//! let css = StyleSheet::from_tree(&node).to_css();
//! assert!(css.contains(":hover"));
//! assert!(node.to_html().starts_with("<button"));
//! ```

pub mod components;

/// Component constructors, used as `cn::toolbar_button()`
pub mod cn {
    pub use crate::components::icon::icon;
    pub use crate::components::toolbar_button::toolbar_button;
    pub use crate::components::tooltip::tooltip;
}

pub mod prelude {
    pub use crate::cn;
    pub use crate::components::icon::IconBuilder;
    pub use crate::components::toolbar_button::{
        ResolvedStyles, StyleInputs, ToolbarButtonBuilder, ToolbarButtonStyles,
        COLLAPSED_INDICATOR, EXPANDED_INDICATOR,
    };
    pub use crate::components::tooltip::{tooltip_bubble_style, TooltipBuilder};
    pub use kiln_icons::{IconName, IconSize};
    pub use kiln_layout::prelude::*;
    pub use kiln_theme::{
        ButtonVariant, ColorScheme, KilnTheme, Theme, ThemePreset, ThemeState,
    };
}

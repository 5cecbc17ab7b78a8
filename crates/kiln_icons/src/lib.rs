//! # Kiln Icons
//!
//! A small named glyph registry. Components ask for icons by name; the
//! registry decides whether a name is known.
//!
//! ## Usage
//!
//! ```
//! use kiln_icons::{icons, lookup, to_svg};
//!
//! // Direct const access
//! let svg = to_svg(icons::ANGLE_DOWN, 16.0);
//! assert!(svg.contains("viewBox=\"0 0 24 24\""));
//!
//! // Lookup by name
//! assert_eq!(lookup("star"), Some(icons::STAR));
//! assert_eq!(lookup("not-an-icon"), None);
//! ```

use std::borrow::Cow;
use std::fmt;

pub mod icons;

/// Default viewBox (all icons are 24x24)
pub const VIEW_BOX: (f32, f32, f32, f32) = (0.0, 0.0, 24.0, 24.0);

/// Default stroke width
pub const STROKE_WIDTH: f32 = 2.0;

/// Name of an icon in the registry
///
/// Any string is accepted; whether it resolves is up to [`lookup`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IconName(Cow<'static, str>);

impl IconName {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the registry knows this name
    pub fn is_registered(&self) -> bool {
        lookup(&self.0).is_some()
    }
}

impl From<&'static str> for IconName {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl From<String> for IconName {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for IconName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rendered icon sizes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconSize {
    Xs,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Xxl,
}

impl IconSize {
    /// Edge length in pixels
    pub fn px(self) -> f32 {
        match self {
            Self::Xs => 12.0,
            Self::Sm => 14.0,
            Self::Md => 16.0,
            Self::Lg => 18.0,
            Self::Xl => 24.0,
            Self::Xxl => 36.0,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "xxl",
        }
    }
}

/// Path data for a named icon
pub fn lookup(name: &str) -> Option<&'static str> {
    match icons::REGISTRY.binary_search_by(|(key, _)| (*key).cmp(name)) {
        Ok(index) => Some(icons::REGISTRY[index].1),
        Err(_) => {
            tracing::debug!("icon `{name}` is not registered");
            None
        }
    }
}

/// Every registered icon name, in sorted order
pub fn names() -> impl Iterator<Item = &'static str> {
    icons::REGISTRY.iter().map(|(name, _)| *name)
}

/// Generate a complete SVG string from icon path data
///
/// # Arguments
/// * `path_data` - The SVG path data (inner content of the SVG)
/// * `size` - The width and height of the SVG in pixels
pub fn to_svg(path_data: &str, size: f32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{path_data}</svg>"#
    )
}

/// Generate SVG with custom stroke width
pub fn to_svg_with_stroke(path_data: &str, size: f32, stroke_width: f32) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="{stroke_width}" stroke-linecap="round" stroke-linejoin="round">{path_data}</svg>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_svg() {
        let svg = to_svg(icons::STAR, 24.0);
        assert!(svg.contains("viewBox=\"0 0 24 24\""));
        assert!(svg.contains("width=\"24\""));
        assert!(svg.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_to_svg_with_stroke() {
        let svg = to_svg_with_stroke(icons::ANGLE_UP, 16.0, 1.5);
        assert!(svg.contains("width=\"16\""));
        assert!(svg.contains("stroke-width=\"1.5\""));
    }

    #[test]
    fn test_registry_is_sorted() {
        let names: Vec<_> = names().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_lookup_chevrons() {
        assert_eq!(lookup("angle-down"), Some(icons::ANGLE_DOWN));
        assert_eq!(lookup("angle-up"), Some(icons::ANGLE_UP));
        assert!(IconName::from("cog").is_registered());
        assert!(!IconName::from(String::from("unicorn")).is_registered());
    }

    #[test]
    fn test_icon_sizes() {
        assert_eq!(IconSize::Md.px(), 16.0);
        assert_eq!(IconSize::Lg.px(), 18.0);
        assert_eq!(IconSize::default(), IconSize::Md);
    }
}

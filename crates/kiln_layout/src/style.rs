//! Style fragments
//!
//! A [`StyleFragment`] is a named, self-contained set of declarations with
//! optional `:hover` and `:focus` blocks. Its class name is derived from the
//! label and the declaration text, so equal fragments always get equal
//! class names and a theme change produces a new one.
//!
//! # Example
//!
//! ```
//! use kiln_core::Color;
//! use kiln_layout::style::{StyleFragment, StyleValue};
//!
//! let fragment = StyleFragment::builder("card")
//!     .set("background", StyleValue::Color(Color::WHITE))
//!     .set("padding", StyleValue::px(8.0))
//!     .on_hover("background", StyleValue::Color(Color::BLACK))
//!     .build();
//!
//! assert!(fragment.class_name().starts_with("kiln-card-"));
//! assert_eq!(fragment.get("padding"), Some(&StyleValue::Px(8.0)));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use kiln_core::Color;
use rustc_hash::FxHasher;

/// A single CSS-like property value
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Color(Color),
    Px(f32),
    Number(f32),
    Keyword(&'static str),
    /// `width style color`, e.g. `1px solid #2c3235`
    Border {
        width: f32,
        style: &'static str,
        color: Color,
    },
    /// Vertical then horizontal edge insets
    Edges { vertical: f32, horizontal: f32 },
    /// Top-to-bottom two-stop gradient
    LinearGradient { from: Color, to: Color },
}

impl StyleValue {
    pub fn px(value: f32) -> Self {
        Self::Px(value)
    }

    pub fn solid_border(width: f32, color: Color) -> Self {
        Self::Border {
            width,
            style: "solid",
            color,
        }
    }

    /// Zero vertical inset with the given horizontal inset
    pub fn horizontal(horizontal: f32) -> Self {
        Self::Edges {
            vertical: 0.0,
            horizontal,
        }
    }
}

fn length(value: f32) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}px")
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => write!(f, "{color}"),
            Self::Px(value) => f.write_str(&length(*value)),
            Self::Number(value) => write!(f, "{value}"),
            Self::Keyword(keyword) => f.write_str(keyword),
            Self::Border {
                width,
                style,
                color,
            } => write!(f, "{} {style} {color}", length(*width)),
            Self::Edges {
                vertical,
                horizontal,
            } => write!(f, "{} {}", length(*vertical), length(*horizontal)),
            Self::LinearGradient { from, to } => {
                write!(f, "linear-gradient(180deg, {from} 0%, {to} 100%)")
            }
        }
    }
}

/// `property: value`
#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub property: &'static str,
    pub value: StyleValue,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Interaction state a declaration block applies to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PseudoState {
    Hover,
    Focus,
}

impl PseudoState {
    pub fn selector_suffix(self) -> &'static str {
        match self {
            Self::Hover => ":hover",
            Self::Focus => ":focus",
        }
    }
}

/// A named set of declarations contributed to an element's appearance
#[derive(Clone, Debug, PartialEq)]
pub struct StyleFragment {
    label: &'static str,
    class_name: String,
    declarations: Vec<Declaration>,
    hover: Vec<Declaration>,
    focus: Vec<Declaration>,
}

impl StyleFragment {
    pub fn builder(label: &'static str) -> StyleFragmentBuilder {
        StyleFragmentBuilder {
            label,
            declarations: Vec::new(),
            hover: Vec::new(),
            focus: Vec::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Declarations for an interaction state
    pub fn pseudo(&self, state: PseudoState) -> &[Declaration] {
        match state {
            PseudoState::Hover => &self.hover,
            PseudoState::Focus => &self.focus,
        }
    }

    /// Last value declared for `property` in the resting block
    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.declarations
            .iter()
            .rev()
            .find(|decl| decl.property == property)
            .map(|decl| &decl.value)
    }

    /// CSS rules for this fragment, one block per non-empty state
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        write_block(&mut css, &self.class_name, "", &self.declarations);
        for state in [PseudoState::Hover, PseudoState::Focus] {
            write_block(
                &mut css,
                &self.class_name,
                state.selector_suffix(),
                self.pseudo(state),
            );
        }
        css
    }
}

fn write_block(out: &mut String, class_name: &str, suffix: &str, declarations: &[Declaration]) {
    if declarations.is_empty() {
        return;
    }
    out.push('.');
    out.push_str(class_name);
    out.push_str(suffix);
    out.push_str(" {\n");
    for decl in declarations {
        out.push_str("  ");
        out.push_str(&decl.to_string());
        out.push('\n');
    }
    out.push_str("}\n");
}

/// Builder for [`StyleFragment`]
#[derive(Clone, Debug)]
pub struct StyleFragmentBuilder {
    label: &'static str,
    declarations: Vec<Declaration>,
    hover: Vec<Declaration>,
    focus: Vec<Declaration>,
}

impl StyleFragmentBuilder {
    /// Add a resting-state declaration
    pub fn set(mut self, property: &'static str, value: StyleValue) -> Self {
        self.declarations.push(Declaration { property, value });
        self
    }

    /// Add a `:hover` declaration
    pub fn on_hover(mut self, property: &'static str, value: StyleValue) -> Self {
        self.hover.push(Declaration { property, value });
        self
    }

    /// Add a `:focus` declaration
    pub fn on_focus(mut self, property: &'static str, value: StyleValue) -> Self {
        self.focus.push(Declaration { property, value });
        self
    }

    pub fn build(self) -> StyleFragment {
        let class_name = format!("kiln-{}-{:016x}", self.label, self.content_hash());
        StyleFragment {
            label: self.label,
            class_name,
            declarations: self.declarations,
            hover: self.hover,
            focus: self.focus,
        }
    }

    fn content_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.label.hash(&mut hasher);
        for (marker, block) in [(0u8, &self.declarations), (1, &self.hover), (2, &self.focus)] {
            marker.hash(&mut hasher);
            for decl in block {
                decl.to_string().hash(&mut hasher);
            }
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_formatting() {
        assert_eq!(StyleValue::px(0.0).to_string(), "0");
        assert_eq!(StyleValue::px(8.0).to_string(), "8px");
        assert_eq!(StyleValue::horizontal(4.0).to_string(), "0 4px");
        assert_eq!(
            StyleValue::solid_border(1.0, Color::BLACK).to_string(),
            "1px solid #000000"
        );
        assert_eq!(StyleValue::Number(1.0).to_string(), "1");
    }

    #[test]
    fn test_class_name_is_content_addressed() {
        let a = StyleFragment::builder("pad").set("padding", StyleValue::px(4.0)).build();
        let b = StyleFragment::builder("pad").set("padding", StyleValue::px(4.0)).build();
        let c = StyleFragment::builder("pad").set("padding", StyleValue::px(8.0)).build();

        assert_eq!(a.class_name(), b.class_name());
        assert_ne!(a.class_name(), c.class_name());
    }

    #[test]
    fn test_class_name_keeps_full_hash() {
        let fragment = StyleFragment::builder("pad").set("padding", StyleValue::px(4.0)).build();
        let suffix = fragment.class_name().strip_prefix("kiln-pad-").unwrap();
        assert_eq!(suffix.len(), 16);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hover_changes_class_name() {
        let plain = StyleFragment::builder("btn").set("color", StyleValue::Color(Color::WHITE)).build();
        let hovered = StyleFragment::builder("btn")
            .set("color", StyleValue::Color(Color::WHITE))
            .on_hover("color", StyleValue::Color(Color::BLACK))
            .build();
        assert_ne!(plain.class_name(), hovered.class_name());
    }

    #[test]
    fn test_to_css_emits_pseudo_blocks() {
        let fragment = StyleFragment::builder("btn")
            .set("display", StyleValue::Keyword("flex"))
            .on_hover("color", StyleValue::Color(Color::WHITE))
            .on_focus("outline", StyleValue::Keyword("none"))
            .build();
        let css = fragment.to_css();
        let class = fragment.class_name();

        assert!(css.contains(&format!(".{class} {{\n  display: flex;\n}}")));
        assert!(css.contains(&format!(".{class}:hover {{\n  color: #ffffff;\n}}")));
        assert!(css.contains(&format!(".{class}:focus {{\n  outline: none;\n}}")));
    }
}

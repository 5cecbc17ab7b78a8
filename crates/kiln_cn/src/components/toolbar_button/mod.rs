//! Toolbar button - compact themed button for toolbars and panel headers
//!
//! Supports a leading icon, an image icon, a label, an open/closed chevron
//! for menu triggers, and an optional tooltip. The native `button` element
//! receives any forwarded [`NodeRef`] and all passthrough attributes.
//!
//! # Example
//!
//! ```
//! use kiln_cn::prelude::*;
//!
//! let node = cn::toolbar_button()
//!     .icon("star")
//!     .tooltip("Favorite")
//!     .variant(ButtonVariant::Primary)
//!     .render_with(&KilnTheme::dark());
//!
//! let tooltip = node.as_tooltip().unwrap();
//! assert_eq!(tooltip.text, "Favorite");
//! assert_eq!(node.icon_names(), vec!["star"]);
//! ```

pub mod styles;

use kiln_icons::{IconName, IconSize};
use kiln_layout::prelude::*;
use kiln_theme::{ButtonVariant, KilnTheme, Theme, ThemeState};

use crate::components::icon::icon;
use crate::components::tooltip::tooltip;

pub use styles::{resolve, FragmentKey, ResolvedStyles, StyleInputs, ToolbarButtonStyles};

/// Icon shown when `is_open` is `Some(false)`
pub const COLLAPSED_INDICATOR: &str = "angle-down";

/// Icon shown when `is_open` is `Some(true)`
pub const EXPANDED_INDICATOR: &str = "angle-up";

/// Builder for the toolbar button
#[derive(Clone, Debug, Default)]
pub struct ToolbarButtonBuilder {
    /// Leading icon
    icon: Option<IconName>,
    /// Tooltip text; empty text means no tooltip
    tooltip: Option<String>,
    /// Image icon source
    img_src: Option<String>,
    /// `Some(false)` shows angle-down, `Some(true)` angle-up
    is_open: Option<bool>,
    /// Grow to fill the available inline space
    full_width: bool,
    /// Reduced horizontal padding
    narrow: bool,
    variant: ButtonVariant,
    /// Caller class names, appended after the computed ones
    class: Option<String>,
    /// Passthrough native attributes
    attributes: Attributes,
    children: Vec<RenderNode>,
    node_ref: Option<NodeRef>,
}

impl ToolbarButtonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the leading icon by registry name
    pub fn icon(mut self, icon: impl Into<IconName>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Wrap the button in a tooltip shown below it
    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = Some(text.into());
        self
    }

    /// Show an image icon (rendered 16x16)
    pub fn img_src(mut self, src: impl Into<String>) -> Self {
        self.img_src = Some(src.into());
        self
    }

    /// Show an open/closed chevron after the label
    pub fn is_open(mut self, is_open: bool) -> Self {
        self.is_open = Some(is_open);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn narrow(mut self, narrow: bool) -> Self {
        self.narrow = narrow;
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Append caller class names after the computed ones
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set a passthrough attribute on the native element
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes.set(name, value);
        self
    }

    /// Merge a set of passthrough attributes
    pub fn attributes(mut self, attributes: &Attributes) -> Self {
        self.attributes.merge(attributes);
        self
    }

    pub fn on_click(mut self, handler: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        self.attributes
            .set(EventKind::Click.attribute_name(), EventHandler::new(handler));
        self
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.attr("disabled", disabled)
    }

    pub fn aria_label(self, label: impl Into<String>) -> Self {
        let label: String = label.into();
        self.attr("aria-label", label)
    }

    /// Add label content
    pub fn child(mut self, child: impl Into<RenderNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Add a text label
    pub fn label(self, text: impl Into<String>) -> Self {
        self.child(RenderNode::Text(text.into()))
    }

    /// Forward a reference to the native `button` element
    pub fn node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// The props that decide which fragments apply
    pub fn style_inputs(&self) -> StyleInputs {
        StyleInputs {
            variant: self.variant,
            full_width: self.full_width,
            narrow: self.narrow,
            has_icon: self.icon.is_some(),
            has_open_indicator: self.is_open.is_some(),
        }
    }

    /// Render against the global theme
    ///
    /// Falls back to the default dark theme when [`ThemeState`] has not
    /// been initialized.
    pub fn render(&self) -> RenderNode {
        match ThemeState::try_get() {
            Some(state) => self.render_with(&state.snapshot()),
            None => {
                tracing::warn!(
                    "ThemeState not initialized, rendering toolbar button with default theme"
                );
                self.render_with(&KilnTheme::default())
            }
        }
    }

    /// Render against an explicit theme
    pub fn render_with(&self, theme: &dyn Theme) -> RenderNode {
        let inputs = self.style_inputs();
        tracing::trace!(
            theme = theme.name(),
            variant = inputs.variant.id(),
            full_width = inputs.full_width,
            narrow = inputs.narrow,
            "rendering toolbar button"
        );

        let resolved = ToolbarButtonStyles::new(theme).resolve(&inputs);
        let body = self.build_button(&resolved);

        match self.tooltip.as_deref() {
            Some(text) => tooltip(body).text(text).side(TooltipSide::Bottom).build(),
            None => body,
        }
    }

    fn build_button(&self, resolved: &ResolvedStyles) -> RenderNode {
        let mut attributes = Attributes::new().with("type", "button");
        attributes.merge(&self.attributes);

        let mut classes = resolved.button_classes();
        if let Some(class) = &self.class {
            classes.push_raw(class);
        }
        // A passthrough `class` joins the list instead of replacing it
        if let Some(AttrValue::Text(class)) = attributes.remove("class") {
            classes.push_raw(&class);
        }

        let mut button = Element::new("button")
            .classes(classes)
            .attributes(attributes)
            .node_ref(self.node_ref.clone());

        if let Some(name) = &self.icon {
            button = button.child(icon(name.clone()).size(IconSize::Lg));
        }

        if let Some(src) = &self.img_src {
            button = button.child(
                Element::new("img")
                    .classes(resolved.img_classes())
                    .attributes(Attributes::new().with("src", src.as_str())),
            );
        }

        if self.has_children() {
            button = button.child(
                Element::new("span")
                    .classes(resolved.content_classes())
                    .children(self.children.iter().cloned()),
            );
        }

        match self.is_open {
            Some(false) => button = button.child(icon(COLLAPSED_INDICATOR)),
            Some(true) => button = button.child(icon(EXPANDED_INDICATOR)),
            None => {}
        }

        button.into()
    }

    /// Empty text counts as no content
    fn has_children(&self) -> bool {
        self.children
            .iter()
            .any(|child| !matches!(child, RenderNode::Text(text) if text.is_empty()))
    }
}

/// Create a toolbar button builder
///
/// # Example
///
/// ```
/// use kiln_cn::prelude::*;
///
/// let node = cn::toolbar_button()
///     .is_open(false)
///     .narrow(true)
///     .render_with(&KilnTheme::light());
///
/// assert!(node.as_tooltip().is_none());
/// assert_eq!(node.icon_names(), vec!["angle-down"]);
/// ```
pub fn toolbar_button() -> ToolbarButtonBuilder {
    ToolbarButtonBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn button_of(node: &RenderNode) -> &Element {
        node.find_element("button").unwrap()
    }

    #[test]
    fn test_child_order() {
        let node = toolbar_button()
            .icon("cog")
            .img_src("/avatar.png")
            .label("Settings")
            .is_open(true)
            .render_with(&KilnTheme::dark());

        let button = button_of(&node);
        let kinds: Vec<&str> = button
            .children
            .iter()
            .map(|child| match child {
                RenderNode::Icon(icon) => icon.name.as_str(),
                RenderNode::Element(element) => element.tag,
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["cog", "img", "span", EXPANDED_INDICATOR]);
    }

    #[test]
    fn test_leading_icon_is_large() {
        let node = toolbar_button().icon("star").render_with(&KilnTheme::dark());
        let icon = button_of(&node).children[0].as_icon().unwrap();
        assert_eq!(icon.size, IconSize::Lg);
    }

    #[test]
    fn test_empty_children_render_no_span() {
        let node = toolbar_button().label("").render_with(&KilnTheme::dark());
        assert!(node.find_element("span").is_none());
        assert!(button_of(&node).children.is_empty());
    }

    #[test]
    fn test_empty_tooltip_is_unwrapped() {
        let node = toolbar_button().tooltip("").render_with(&KilnTheme::dark());
        assert!(node.as_element().is_some());
    }

    #[test]
    fn test_explicit_false_adds_right_padding() {
        let node = toolbar_button()
            .label("Menu")
            .is_open(false)
            .render_with(&KilnTheme::dark());
        let span = node.find_element("span").unwrap();
        assert!(span.classes.contains_label("toolbar-button-content-right-icon"));
    }

    #[test]
    fn test_style_inputs() {
        let builder = toolbar_button()
            .icon("star")
            .is_open(false)
            .variant(ButtonVariant::Destructive);
        assert_eq!(
            builder.style_inputs(),
            StyleInputs {
                variant: ButtonVariant::Destructive,
                full_width: false,
                narrow: false,
                has_icon: true,
                has_open_indicator: true,
            }
        );
    }
}

//! Tooltip component - lightweight informational text on hover
//!
//! Wraps an anchor node in a [`TooltipNode`]. The host renders the anchor
//! unmodified and shows the text in an overlay placed on `side`; the overlay
//! itself is drawn with [`tooltip_bubble_style`].
//!
//! # Example
//!
//! ```
//! use kiln_cn::prelude::*;
//!
//! let anchor = cn::toolbar_button().label("Save").render_with(&KilnTheme::dark());
//!
//! let node = cn::tooltip(anchor.clone())
//!     .text("Save dashboard")
//!     .side(TooltipSide::Bottom)
//!     .build();
//! assert_eq!(node.as_tooltip().unwrap().side, TooltipSide::Bottom);
//!
//! // No text, no wrapper
//! assert_eq!(cn::tooltip(anchor.clone()).build(), anchor);
//! ```

use kiln_layout::prelude::*;
use kiln_theme::Theme;

/// Builder for tooltip component
#[derive(Clone, Debug)]
pub struct TooltipBuilder {
    /// The anchor element
    child: RenderNode,
    /// Text to show in the tooltip
    text: Option<String>,
    /// Side where the tooltip appears
    side: TooltipSide,
    /// Alignment relative to anchor
    align: TooltipAlign,
    /// Delay before opening (ms)
    open_delay_ms: u32,
    /// Delay before closing (ms)
    close_delay_ms: u32,
    /// Offset from anchor (pixels)
    offset: f32,
}

impl TooltipBuilder {
    pub fn new(child: impl Into<RenderNode>) -> Self {
        Self {
            child: child.into(),
            text: None,
            side: TooltipSide::Top,
            align: TooltipAlign::Center,
            open_delay_ms: 400, // Default 400ms delay before showing
            close_delay_ms: 0,  // Default 0ms delay - hide immediately
            offset: 6.0,
        }
    }

    /// Set the text to display in the tooltip
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the side where the tooltip appears
    pub fn side(mut self, side: TooltipSide) -> Self {
        self.side = side;
        self
    }

    /// Set the alignment relative to the anchor
    pub fn align(mut self, align: TooltipAlign) -> Self {
        self.align = align;
        self
    }

    /// Set the delay before opening (in milliseconds)
    pub fn open_delay_ms(mut self, delay: u32) -> Self {
        self.open_delay_ms = delay;
        self
    }

    /// Set the delay before closing (in milliseconds)
    pub fn close_delay_ms(mut self, delay: u32) -> Self {
        self.close_delay_ms = delay;
        self
    }

    /// Set the offset from the anchor (in pixels)
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Wrap the anchor, or return it untouched when there is no text
    pub fn build(self) -> RenderNode {
        match self.text {
            Some(text) if !text.is_empty() => RenderNode::Tooltip(TooltipNode {
                text,
                side: self.side,
                align: self.align,
                open_delay_ms: self.open_delay_ms,
                close_delay_ms: self.close_delay_ms,
                offset: self.offset,
                child: Box::new(self.child),
            }),
            _ => self.child,
        }
    }
}

impl From<TooltipBuilder> for RenderNode {
    fn from(builder: TooltipBuilder) -> Self {
        builder.build()
    }
}

/// Style of the tooltip bubble the host draws
///
/// Tooltips use inverted colors (dark bubble on light themes and the
/// reverse).
pub fn tooltip_bubble_style(theme: &dyn Theme) -> StyleFragment {
    let colors = theme.colors();
    let spacing = theme.spacing();
    StyleFragment::builder("tooltip")
        .set("background", StyleValue::Color(colors.tooltip_bg))
        .set("color", StyleValue::Color(colors.tooltip_text))
        .set("border-radius", StyleValue::px(theme.radii().radius_sm))
        .set(
            "padding",
            StyleValue::Edges {
                vertical: spacing.xs,
                horizontal: spacing.sm,
            },
        )
        .set("white-space", StyleValue::Keyword("nowrap"))
        .build()
}

/// Create a tooltip around an anchor node
pub fn tooltip(child: impl Into<RenderNode>) -> TooltipBuilder {
    TooltipBuilder::new(child)
}

//! Render tree
//!
//! Components produce a [`RenderNode`] tree. The host walks it to create
//! native elements; tests and the HTML serializer walk it directly.

use kiln_icons::{IconName, IconSize};

use crate::attributes::{Attributes, Event};
use crate::class_list::ClassList;
use crate::node_ref::NodeRef;

/// A node in the render tree
#[derive(Clone, Debug, PartialEq)]
pub enum RenderNode {
    Element(Element),
    Text(String),
    Icon(IconNode),
    Tooltip(TooltipNode),
}

impl RenderNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_icon(&self) -> Option<&IconNode> {
        match self {
            Self::Icon(icon) => Some(icon),
            _ => None,
        }
    }

    pub fn as_tooltip(&self) -> Option<&TooltipNode> {
        match self {
            Self::Tooltip(tooltip) => Some(tooltip),
            _ => None,
        }
    }

    /// Direct children of this node
    pub fn children(&self) -> &[RenderNode] {
        match self {
            Self::Element(element) => &element.children,
            Self::Tooltip(tooltip) => std::slice::from_ref(tooltip.child.as_ref()),
            Self::Text(_) | Self::Icon(_) => &[],
        }
    }

    /// Pre-order traversal of this node and all descendants
    pub fn descendants(&self) -> Vec<&RenderNode> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(node.children().iter().rev());
        }
        out
    }

    /// Names of every icon in the tree, in render order
    pub fn icon_names(&self) -> Vec<&str> {
        self.descendants()
            .into_iter()
            .filter_map(RenderNode::as_icon)
            .map(|icon| icon.name.as_str())
            .collect()
    }

    /// First element in the tree with the given tag
    pub fn find_element(&self, tag: &str) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .filter_map(RenderNode::as_element)
            .find(|element| element.tag == tag)
    }

    /// Concatenated text content
    pub fn text_content(&self) -> String {
        self.descendants()
            .into_iter()
            .filter_map(|node| match node {
                Self::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl From<Element> for RenderNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<IconNode> for RenderNode {
    fn from(icon: IconNode) -> Self {
        Self::Icon(icon)
    }
}

impl From<TooltipNode> for RenderNode {
    fn from(tooltip: TooltipNode) -> Self {
        Self::Tooltip(tooltip)
    }
}

impl From<&str> for RenderNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RenderNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A native element (`button`, `span`, `img`, ...)
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: ClassList,
    pub attributes: Attributes,
    pub children: Vec<RenderNode>,
    pub node_ref: Option<NodeRef>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: ClassList::new(),
            attributes: Attributes::new(),
            children: Vec::new(),
            node_ref: None,
        }
    }

    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn child(mut self, child: impl Into<RenderNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = RenderNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn node_ref(mut self, node_ref: Option<NodeRef>) -> Self {
        self.node_ref = node_ref;
        self
    }

    /// Deliver an event to this element's handlers
    pub fn dispatch(&self, event: &Event) -> bool {
        self.attributes.dispatch(event)
    }
}

/// A glyph from the icon registry
#[derive(Clone, Debug, PartialEq)]
pub struct IconNode {
    pub name: IconName,
    pub size: IconSize,
}

/// Side where a tooltip appears relative to its anchor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipSide {
    /// Above the anchor (default)
    #[default]
    Top,
    /// Below the anchor
    Bottom,
    /// To the right of the anchor
    Right,
    /// To the left of the anchor
    Left,
}

impl TooltipSide {
    pub fn id(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

/// Alignment of a tooltip relative to its anchor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TooltipAlign {
    /// Align to start of anchor
    Start,
    /// Center with anchor (default)
    #[default]
    Center,
    /// Align to end of anchor
    End,
}

/// Tooltip host wrapping a single anchor child
///
/// The host renders `child` unmodified and shows `text` on hover.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipNode {
    pub text: String,
    pub side: TooltipSide,
    pub align: TooltipAlign,
    pub open_delay_ms: u32,
    pub close_delay_ms: u32,
    pub offset: f32,
    pub child: Box<RenderNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendants_preorder() {
        let tree = RenderNode::from(
            Element::new("div")
                .child(IconNode {
                    name: "star".into(),
                    size: IconSize::Md,
                })
                .child(Element::new("span").child("label"))
                .child(IconNode {
                    name: "angle-down".into(),
                    size: IconSize::Md,
                }),
        );

        assert_eq!(tree.icon_names(), vec!["star", "angle-down"]);
        assert_eq!(tree.text_content(), "label");
        assert!(tree.find_element("span").is_some());
        assert!(tree.find_element("img").is_none());
    }

    #[test]
    fn test_tooltip_children() {
        let tooltip = RenderNode::from(TooltipNode {
            text: "Save".to_string(),
            side: TooltipSide::Bottom,
            align: TooltipAlign::Center,
            open_delay_ms: 0,
            close_delay_ms: 0,
            offset: 6.0,
            child: Box::new(Element::new("button").into()),
        });
        assert_eq!(tooltip.children().len(), 1);
        assert!(tooltip.find_element("button").is_some());
    }
}

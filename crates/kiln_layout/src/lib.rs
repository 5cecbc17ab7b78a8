//! Kiln Layout
//!
//! The host-facing half of the component library: the render tree
//! components produce, the style fragments they attach to it, and the
//! helpers a host needs to turn both into something on screen.
//!
//! - [`style`]: `StyleFragment`, `StyleValue` and their CSS text
//! - [`class_list`]: ordered class sets and computed styles
//! - [`stylesheet`]: fragment collection for CSS injection
//! - [`element`]: `RenderNode`, `Element`, icon and tooltip nodes
//! - [`attributes`]: native attributes and event handlers
//! - [`node_ref`]: forwarded element references
//! - `RenderNode::to_html` for headless output

pub mod attributes;
pub mod class_list;
pub mod element;
mod html;
pub mod node_ref;
pub mod style;
pub mod stylesheet;

pub use attributes::{AttrValue, Attributes, Event, EventHandler, EventKind};
pub use class_list::{ClassList, ComputedStyle};
pub use element::{Element, IconNode, RenderNode, TooltipAlign, TooltipNode, TooltipSide};
pub use node_ref::{NodeId, NodeRef};
pub use style::{Declaration, PseudoState, StyleFragment, StyleFragmentBuilder, StyleValue};
pub use stylesheet::StyleSheet;

/// Everything a component module needs
pub mod prelude {
    pub use crate::attributes::{AttrValue, Attributes, Event, EventHandler, EventKind};
    pub use crate::class_list::{ClassList, ComputedStyle};
    pub use crate::element::{
        Element, IconNode, RenderNode, TooltipAlign, TooltipNode, TooltipSide,
    };
    pub use crate::node_ref::{NodeId, NodeRef};
    pub use crate::style::{PseudoState, StyleFragment, StyleValue};
    pub use crate::stylesheet::StyleSheet;
}

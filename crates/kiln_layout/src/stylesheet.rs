//! Style sheets
//!
//! Collects the style fragments referenced by a render tree so a host can
//! inject them as CSS. Fragments are keyed by class name; inserting the same
//! fragment twice is a no-op.
//!
//! # Example
//!
//! ```
//! use kiln_layout::prelude::*;
//!
//! let fragment = StyleFragment::builder("pill")
//!     .set("border-radius", StyleValue::px(999.0))
//!     .build();
//! let tree = RenderNode::from(
//!     Element::new("span").classes(ClassList::from_fragments([&fragment])),
//! );
//!
//! let sheet = StyleSheet::from_tree(&tree);
//! assert!(sheet.get(fragment.class_name()).is_some());
//! assert!(sheet.to_css().contains("border-radius: 999px;"));
//! ```

use indexmap::IndexMap;

use crate::element::RenderNode;
use crate::style::StyleFragment;

/// Ordered collection of style fragments keyed by class name
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSheet {
    fragments: IndexMap<String, StyleFragment>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every fragment referenced in `tree`
    pub fn from_tree(tree: &RenderNode) -> Self {
        let mut sheet = Self::new();
        sheet.collect(tree);
        sheet
    }

    /// Add the fragments referenced in `tree`
    pub fn collect(&mut self, tree: &RenderNode) {
        for node in tree.descendants() {
            if let Some(element) = node.as_element() {
                for fragment in element.classes.fragments() {
                    self.insert(fragment.clone());
                }
            }
        }
    }

    pub fn insert(&mut self, fragment: StyleFragment) {
        if !self.fragments.contains_key(fragment.class_name()) {
            tracing::trace!("StyleSheet::insert - {}", fragment.class_name());
            self.fragments
                .insert(fragment.class_name().to_string(), fragment);
        }
    }

    pub fn get(&self, class_name: &str) -> Option<&StyleFragment> {
        self.fragments.get(class_name)
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// CSS text for every fragment in insertion order
    pub fn to_css(&self) -> String {
        self.fragments.values().map(StyleFragment::to_css).collect()
    }
}

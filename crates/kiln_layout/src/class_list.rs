//! Ordered class lists
//!
//! A [`ClassList`] is the merged `class` attribute of an element: style
//! fragments contributed by the component, followed by any raw class names
//! the caller appends. Entries are unique and keep first-insertion order.

use indexmap::IndexMap;

use crate::style::{Declaration, PseudoState, StyleFragment, StyleValue};

/// Ordered, de-duplicated set of class names
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClassList {
    /// Class name -> fragment (None for raw caller classes)
    entries: IndexMap<String, Option<StyleFragment>>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from fragments in order
    pub fn from_fragments<'a>(fragments: impl IntoIterator<Item = &'a StyleFragment>) -> Self {
        let mut list = Self::new();
        for fragment in fragments {
            list.push_fragment(fragment);
        }
        list
    }

    /// Append a style fragment
    pub fn push_fragment(&mut self, fragment: &StyleFragment) {
        self.entries
            .entry(fragment.class_name().to_string())
            .or_insert_with(|| Some(fragment.clone()));
    }

    /// Append a fragment only when `condition` holds
    pub fn push_fragment_if(&mut self, condition: bool, fragment: &StyleFragment) {
        if condition {
            self.push_fragment(fragment);
        }
    }

    /// Append raw caller classes (whitespace separated)
    pub fn push_raw(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            self.entries.entry(class.to_string()).or_insert(None);
        }
    }

    pub fn with_raw(mut self, classes: &str) -> Self {
        self.push_raw(classes);
        self
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.entries.contains_key(class_name)
    }

    /// Whether a fragment with this label is present
    pub fn contains_label(&self, label: &str) -> bool {
        self.fragments().any(|fragment| fragment.label() == label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every class name in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Style fragments in order, skipping raw classes
    pub fn fragments(&self) -> impl Iterator<Item = &StyleFragment> {
        self.entries.values().filter_map(Option::as_ref)
    }

    /// Labels of the style fragments in order
    pub fn labels(&self) -> Vec<&'static str> {
        self.fragments().map(StyleFragment::label).collect()
    }

    /// Space-joined class attribute value
    pub fn to_class_string(&self) -> String {
        self.names().collect::<Vec<_>>().join(" ")
    }

    /// Fold the resting declarations of every fragment, last one wins
    pub fn computed_style(&self) -> ComputedStyle {
        ComputedStyle::fold(self.fragments().map(StyleFragment::declarations))
    }

    /// Fold the declarations for an interaction state, last one wins
    pub fn computed_pseudo(&self, state: PseudoState) -> ComputedStyle {
        ComputedStyle::fold(self.fragments().map(|fragment| fragment.pseudo(state)))
    }
}

/// Final property values after applying fragments in order
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComputedStyle {
    values: IndexMap<&'static str, StyleValue>,
}

impl ComputedStyle {
    fn fold<'a>(blocks: impl Iterator<Item = &'a [Declaration]>) -> Self {
        let mut values = IndexMap::new();
        for block in blocks {
            for decl in block {
                values.insert(decl.property, decl.value.clone());
            }
        }
        Self { values }
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.values.get(property)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &StyleValue)> {
        self.values.iter().map(|(property, value)| (*property, value))
    }
}

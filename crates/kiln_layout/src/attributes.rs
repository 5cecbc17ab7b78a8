//! Native element attributes
//!
//! Components set their own attributes first and then merge the caller's
//! passthrough [`Attributes`] on top, so a caller can override anything the
//! component set except what the component routes elsewhere (classes).

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

/// Events a host may dispatch to an element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    Focus,
    Blur,
    KeyDown,
}

impl EventKind {
    /// Attribute key the handler is stored under (`onclick`, ...)
    pub fn attribute_name(self) -> &'static str {
        match self {
            Self::Click => "onclick",
            Self::MouseEnter => "onmouseenter",
            Self::MouseLeave => "onmouseleave",
            Self::Focus => "onfocus",
            Self::Blur => "onblur",
            Self::KeyDown => "onkeydown",
        }
    }
}

/// An event delivered to a handler
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    /// Key name for keyboard events
    pub key: Option<String>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self { kind, key: None }
    }
}

/// Shared event callback
///
/// Two handlers are equal only when they are the same allocation.
#[derive(Clone)]
pub struct EventHandler(Arc<dyn Fn(&Event) + Send + Sync>);

impl EventHandler {
    pub fn new(handler: impl Fn(&Event) + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    pub fn call(&self, event: &Event) {
        (self.0)(event)
    }
}

impl PartialEq for EventHandler {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler(..)")
    }
}

/// Attribute value
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Text(String),
    /// Boolean attribute; `false` is omitted when serialized
    Bool(bool),
    Handler(EventHandler),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<EventHandler> for AttrValue {
    fn from(value: EventHandler) -> Self {
        Self::Handler(value)
    }
}

/// Ordered attribute map with last-write-wins semantics
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    values: IndexMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any earlier value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Register an event handler
    pub fn on(
        mut self,
        kind: EventKind,
        handler: impl Fn(&Event) + Send + Sync + 'static,
    ) -> Self {
        self.set(kind.attribute_name(), EventHandler::new(handler));
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    /// Text value of an attribute, if it is textual
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(AttrValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.values.shift_remove(name)
    }

    /// Apply `other` on top of `self`; `other` wins on conflicts
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in &other.values {
            self.values.insert(name.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Invoke the handler registered for `event`, if any
    pub fn dispatch(&self, event: &Event) -> bool {
        match self.values.get(event.kind.attribute_name()) {
            Some(AttrValue::Handler(handler)) => {
                handler.call(event);
                true
            }
            _ => false,
        }
    }
}

//! Forwarded element references
//!
//! A [`NodeRef`] is handed to a component by its caller and attached to the
//! component's native element. The host fills it in when it mounts the
//! element, which lets the caller reach the element without the component
//! knowing why.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Host-assigned id of a mounted element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Allocate a process-unique id (for hosts without their own ids)
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared slot for the mounted element id
///
/// Clones share the slot; equality is slot identity.
#[derive(Clone, Default)]
pub struct NodeRef(Arc<RwLock<Option<NodeId>>>);

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounted element, if the host has attached one
    pub fn get(&self) -> Option<NodeId> {
        *self.0.read().unwrap()
    }

    /// Called by the host on mount (`Some`) and unmount (`None`)
    pub fn set(&self, node: Option<NodeId>) {
        *self.0.write().unwrap() = node;
    }

    pub fn is_attached(&self) -> bool {
        self.get().is_some()
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeRef").field(&self.get()).finish()
    }
}

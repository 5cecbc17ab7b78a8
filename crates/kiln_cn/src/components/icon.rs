//! Icon component - a named glyph from the icon registry
//!
//! Unknown names still render (as an empty glyph); whether a name exists is
//! the registry's concern.

use kiln_icons::{IconName, IconSize};
use kiln_layout::prelude::*;

/// Builder for an icon node
#[derive(Clone, Debug, PartialEq)]
pub struct IconBuilder {
    name: IconName,
    size: IconSize,
}

impl IconBuilder {
    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn build(self) -> RenderNode {
        if !self.name.is_registered() {
            tracing::debug!("rendering unregistered icon `{}`", self.name);
        }
        RenderNode::Icon(IconNode {
            name: self.name,
            size: self.size,
        })
    }
}

impl From<IconBuilder> for RenderNode {
    fn from(builder: IconBuilder) -> Self {
        builder.build()
    }
}

/// Create an icon by registry name (default size `Md`)
pub fn icon(name: impl Into<IconName>) -> IconBuilder {
    IconBuilder {
        name: name.into(),
        size: IconSize::default(),
    }
}

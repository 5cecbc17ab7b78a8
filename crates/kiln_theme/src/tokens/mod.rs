//! Design tokens for theming
//!
//! Tokens are the atomic values that make up a design system:
//! - Colors
//! - Spacing (margins, padding)
//! - Control heights
//! - Border radii

mod color;
mod height;
mod radius;
mod spacing;

pub use color::*;
pub use height::*;
pub use radius::*;
pub use spacing::*;

//! Kiln Core
//!
//! Primitives shared by every Kiln crate. At the moment this is the
//! [`Color`] type: theme tokens, style fragments and the HTML serializer
//! all speak it.

pub mod color;

pub use color::{Color, ColorParseError};

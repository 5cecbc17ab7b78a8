//! Built-in themes

mod kiln;

pub use kiln::{dark, light, KilnTheme};

pub mod icon;
pub mod toolbar_button;
pub mod tooltip;

pub mod builtin;
pub mod zoom_display;

pub mod cli;
pub mod ports;
pub mod render;
pub mod zoom_pan;

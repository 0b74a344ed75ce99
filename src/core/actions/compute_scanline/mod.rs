pub mod compute_scanline;
pub mod ports;

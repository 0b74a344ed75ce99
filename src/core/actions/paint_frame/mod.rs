pub mod paint_frame;
pub mod ports;

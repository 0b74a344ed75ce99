pub mod cancellation;
pub mod compute_scanline;
pub mod paint_frame;

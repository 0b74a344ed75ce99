pub mod colour;
pub mod complex;
pub mod fractal_bounds;
pub mod fractal_config;
pub mod fractal_preset;
pub mod pixel_buffer;
pub mod render_point;

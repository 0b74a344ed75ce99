pub mod calculate_chunk_size;
pub mod pixel_to_complex_coords;
pub mod zoom_bounds;

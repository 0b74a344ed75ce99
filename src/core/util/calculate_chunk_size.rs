/// Upper bound on pixels evaluated per chunk.
pub const MAX_CHUNK_PIXELS: u64 = 1000;

/// Chunk width for a frame: `min(1000, total / 100)`, never below one pixel.
#[must_use]
pub fn calculate_chunk_size(total_pixels: u64) -> usize {
    (total_pixels / 100).clamp(1, MAX_CHUNK_PIXELS) as usize
}

/// Column ranges `[start, end)` covering one scanline of `width` pixels.
pub fn chunk_ranges(width: u32, chunk_size: usize) -> impl Iterator<Item = (u32, u32)> {
    let step = chunk_size.max(1);

    (0..width)
        .step_by(step)
        .map(move |start| (start, start.saturating_add(step as u32).min(width)))
}

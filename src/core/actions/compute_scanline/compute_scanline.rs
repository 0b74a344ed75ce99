use rayon::prelude::*;

use crate::core::actions::compute_scanline::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::render_point::RenderPoint;
use crate::core::util::calculate_chunk_size::chunk_ranges;

/// Escape times for every pixel of scanline `y`, left to right.
///
/// The row is split into `chunk_size`-wide column ranges which are evaluated
/// on the rayon pool and stitched back together in order.
pub fn compute_scanline<Alg>(
    algorithm: &Alg,
    y: u32,
    width: u32,
    chunk_size: usize,
) -> Vec<RenderPoint>
where
    Alg: FractalAlgorithm + ?Sized,
{
    let ranges: Vec<(u32, u32)> = chunk_ranges(width, chunk_size).collect();

    let chunks: Vec<Vec<RenderPoint>> = ranges
        .into_par_iter()
        .map(|(start, end)| {
            (start..end)
                .map(|x| RenderPoint {
                    x,
                    y,
                    iterations: algorithm.compute(x, y),
                })
                .collect()
        })
        .collect();

    chunks.into_iter().flatten().collect()
}

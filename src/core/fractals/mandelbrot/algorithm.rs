use crate::core::actions::compute_scanline::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_bounds::FractalBounds;
use crate::core::data::fractal_config::FractalConfig;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex;

/// Squared escape radius; `|z| > 2` compared without a square root.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Outcome of iterating `z <- z^2 + c` from `z = 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IterationResult {
    /// Escaped after `count` steps stayed bounded, with the first escaping `|z|^2`.
    Escaped { count: u32, magnitude_squared: f64 },
    /// Never escaped within the iteration limit.
    Bounded,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum IterationMode {
    #[default]
    Smooth,
    Discrete,
}

#[must_use]
pub fn iterate(c: Complex, max_iterations: u32) -> IterationResult {
    let mut z = Complex::ZERO;

    for count in 0..max_iterations {
        z = z.square() + c;

        let magnitude_squared = z.magnitude_squared();
        if magnitude_squared > ESCAPE_RADIUS_SQUARED {
            return IterationResult::Escaped {
                count,
                magnitude_squared,
            };
        }
    }

    IterationResult::Bounded
}

/// Integer escape time, or `max_iterations` for points treated as inside the set.
#[must_use]
pub fn escape_count(c: Complex, max_iterations: u32) -> u32 {
    match iterate(c, max_iterations) {
        IterationResult::Escaped { count, .. } => count,
        IterationResult::Bounded => max_iterations,
    }
}

/// Continuous escape time `n + 1 - log2(log2(|z|))`; exactly `max_iterations` if bounded.
#[must_use]
pub fn smooth_escape_count(c: Complex, max_iterations: u32) -> f64 {
    match iterate(c, max_iterations) {
        IterationResult::Escaped {
            count,
            magnitude_squared,
        } => f64::from(count) + 1.0 - magnitude_squared.sqrt().log2().log2(),
        IterationResult::Bounded => f64::from(max_iterations),
    }
}

#[must_use]
pub fn iterations_for(c: Complex, max_iterations: u32, mode: IterationMode) -> f64 {
    match mode {
        IterationMode::Smooth => smooth_escape_count(c, max_iterations),
        IterationMode::Discrete => f64::from(escape_count(c, max_iterations)),
    }
}

/// Per-pixel escape-time evaluation over one frame's pixel grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    width: u32,
    height: u32,
    bounds: FractalBounds,
    max_iterations: u32,
    mode: IterationMode,
}

impl MandelbrotAlgorithm {
    /// Expects an already validated config.
    #[must_use]
    pub fn new(config: &FractalConfig, mode: IterationMode) -> Self {
        Self {
            width: config.width,
            height: config.height,
            bounds: config.bounds,
            max_iterations: config.max_iterations,
            mode,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn mode(&self) -> IterationMode {
        self.mode
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    fn compute(&self, x: u32, y: u32) -> f64 {
        let c = pixel_to_complex(
            f64::from(x),
            f64::from(y),
            self.width,
            self.height,
            &self.bounds,
        );

        iterations_for(c, self.max_iterations, self.mode)
    }
}

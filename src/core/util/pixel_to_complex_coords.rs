use crate::core::data::complex::Complex;
use crate::core::data::fractal_bounds::FractalBounds;

/// Linear map from the pixel grid onto `bounds`.
///
/// Not range-checked: coordinates outside `[0, width) x [0, height)` extrapolate.
#[must_use]
pub fn pixel_to_complex(
    px: f64,
    py: f64,
    width: u32,
    height: u32,
    bounds: &FractalBounds,
) -> Complex {
    let real = bounds.min_real() + (px / f64::from(width)) * bounds.width();
    let imag = bounds.min_imaginary() + (py / f64::from(height)) * bounds.height();

    Complex { real, imag }
}

/// Inverse of [`pixel_to_complex`]. Returns fractional pixel coordinates.
#[must_use]
pub fn complex_to_pixel(
    c: Complex,
    width: u32,
    height: u32,
    bounds: &FractalBounds,
) -> (f64, f64) {
    let x = ((c.real - bounds.min_real()) / bounds.width()) * f64::from(width);
    let y = ((c.imag - bounds.min_imaginary()) / bounds.height()) * f64::from(height);

    (x, y)
}

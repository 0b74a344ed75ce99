use crate::core::data::complex::Complex;
use crate::core::data::fractal_bounds::FractalBounds;

/// Real-axis width that counts as 1x zoom.
pub const REFERENCE_VIEW_WIDTH: f64 = 4.0;

/// Magnification relative to a 4-unit-wide view, rounded to a whole number.
#[must_use]
pub fn calculate_zoom_level(bounds: &FractalBounds) -> f64 {
    (REFERENCE_VIEW_WIDTH / bounds.width()).round()
}

#[must_use]
pub fn calculate_center(bounds: &FractalBounds) -> Complex {
    bounds.center()
}

/// `1234567` becomes `1.2M`, `4500` becomes `4.5K`, smaller values print as-is.
#[must_use]
pub fn format_zoom_level(zoom: f64) -> String {
    if zoom >= 1_000_000.0 {
        format!("{:.1}M", zoom / 1_000_000.0)
    } else if zoom >= 1_000.0 {
        format!("{:.1}K", zoom / 1_000.0)
    } else {
        format!("{}", zoom)
    }
}

/// Centre coordinate with six decimals.
#[must_use]
pub fn format_coordinate(value: f64) -> String {
    format!("{:.6}", value)
}

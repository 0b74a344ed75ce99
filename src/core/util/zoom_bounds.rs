use crate::core::data::fractal_bounds::FractalBounds;

/// Real-axis extent of the unzoomed viewport.
pub const BASE_VIEW_WIDTH: f64 = 3.5;
/// Imaginary-axis extent of the unzoomed viewport.
pub const BASE_VIEW_HEIGHT: f64 = 2.5;

/// Viewport of `BASE_VIEW_WIDTH / scale` by `BASE_VIEW_HEIGHT / scale` centred on the given point.
///
/// `scale` must be positive. Past roughly 1e15 the edges stop being
/// distinguishable in f64 and the result degenerates.
#[must_use]
pub fn zoom_bounds(center_x: f64, center_y: f64, scale: f64) -> FractalBounds {
    debug_assert!(scale > 0.0, "zoom scale must be positive, got {}", scale);

    let half_width = BASE_VIEW_WIDTH / scale / 2.0;
    let half_height = BASE_VIEW_HEIGHT / scale / 2.0;

    FractalBounds::from_edges_unchecked(
        center_x - half_width,
        center_x + half_width,
        center_y - half_height,
        center_y + half_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn unit_scale_reproduces_base_viewport() {
        for (cx, cy) in [(0.0, 0.0), (-0.75, 0.0), (-0.16, 1.04), (0.25, -0.5)] {
            let bounds = zoom_bounds(cx, cy, 1.0);

            assert!((bounds.width() - BASE_VIEW_WIDTH).abs() < TOLERANCE);
            assert!((bounds.height() - BASE_VIEW_HEIGHT).abs() < TOLERANCE);
            assert!((bounds.center().real - cx).abs() < TOLERANCE);
            assert!((bounds.center().imag - cy).abs() < TOLERANCE);
        }
    }

    #[test]
    fn scale_divides_extent() {
        let bounds = zoom_bounds(-0.75, 0.1, 4.0);

        assert!((bounds.width() - 0.875).abs() < TOLERANCE);
        assert!((bounds.height() - 0.625).abs() < TOLERANCE);
        assert!(bounds.validate().is_ok());
    }

    #[test]
    fn scale_below_one_zooms_out() {
        let bounds = zoom_bounds(0.0, 0.0, 0.5);

        assert!((bounds.width() - 7.0).abs() < TOLERANCE);
        assert!((bounds.height() - 5.0).abs() < TOLERANCE);
    }
}

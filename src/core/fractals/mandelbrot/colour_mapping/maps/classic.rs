use std::f64::consts::PI;

use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

/// Three squared sinusoids at different frequencies, one per channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicPalette;

impl Palette for ClassicPalette {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Classic
    }

    fn colour_at(&self, t: f64) -> Colour {
        Colour::from_unit_channels(
            (PI * t * 3.0).sin().powi(2),
            (PI * t * 5.0 + PI / 3.0).sin().powi(2),
            (PI * t * 7.0 + 2.0 * PI / 3.0).sin().powi(2),
        )
    }
}

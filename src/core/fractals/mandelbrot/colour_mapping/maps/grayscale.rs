use crate::core::data::colour::{Colour, channel_from_unit};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

#[derive(Debug, Clone, Copy, Default)]
pub struct GrayscalePalette;

impl Palette for GrayscalePalette {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Grayscale
    }

    fn colour_at(&self, t: f64) -> Colour {
        let intensity = channel_from_unit(t);

        Colour {
            r: intensity,
            g: intensity,
            b: intensity,
        }
    }
}

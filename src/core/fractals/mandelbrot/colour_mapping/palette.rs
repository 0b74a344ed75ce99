use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;

/// A pure gradient over normalised escape time `t` in `[0, 1)`.
pub trait Palette: Send + Sync {
    fn kind(&self) -> ColourSchemeKind;

    fn colour_at(&self, t: f64) -> Colour;
}

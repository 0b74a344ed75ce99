use crate::core::actions::paint_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::factory::palette_for;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

/// Colour for an escape time. Anything at or beyond `max_iterations` is
/// treated as inside the set and painted black.
#[must_use]
pub fn colour_for(iterations: f64, max_iterations: u32, scheme: ColourSchemeKind) -> Colour {
    let max = f64::from(max_iterations);

    if max_iterations == 0 || iterations >= max {
        return Colour::BLACK;
    }

    palette_for(scheme).colour_at(iterations / max)
}

pub struct MandelbrotColourMap {
    max_iterations: u32,
    palette: &'static dyn Palette,
}

impl MandelbrotColourMap {
    #[must_use]
    pub fn new(scheme: ColourSchemeKind, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            palette: palette_for(scheme),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ColourSchemeKind {
        self.palette.kind()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

impl std::fmt::Debug for MandelbrotColourMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MandelbrotColourMap")
            .field("max_iterations", &self.max_iterations)
            .field("scheme", &self.kind())
            .finish()
    }
}

impl ColourMap for MandelbrotColourMap {
    fn map(&self, iterations: f64) -> Colour {
        colour_for(iterations, self.max_iterations, self.kind())
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

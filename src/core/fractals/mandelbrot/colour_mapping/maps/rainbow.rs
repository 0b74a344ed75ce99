use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

/// Full hue sweep at maximum saturation and value.
#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowPalette;

impl Palette for RainbowPalette {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Rainbow
    }

    fn colour_at(&self, t: f64) -> Colour {
        hsv_to_rgb(t * 360.0, 1.0, 1.0)
    }
}

/// Hue in degrees, saturation and value in `[0, 1]`. Hues outside
/// `[0, 360)` yield black.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let chroma = value * saturation;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - chroma;

    let (r, g, b) = match hue {
        h if (0.0..60.0).contains(&h) => (chroma, x, 0.0),
        h if (60.0..120.0).contains(&h) => (x, chroma, 0.0),
        h if (120.0..180.0).contains(&h) => (0.0, chroma, x),
        h if (180.0..240.0).contains(&h) => (0.0, x, chroma),
        h if (240.0..300.0).contains(&h) => (x, 0.0, chroma),
        h if (300.0..360.0).contains(&h) => (chroma, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    Colour::from_unit_channels(r + m, g + m, b + m)
}

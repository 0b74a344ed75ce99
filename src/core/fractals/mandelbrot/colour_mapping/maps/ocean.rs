use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

/// Deep blue rising through cyan towards white.
#[derive(Debug, Clone, Copy, Default)]
pub struct OceanPalette;

impl Palette for OceanPalette {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Ocean
    }

    fn colour_at(&self, t: f64) -> Colour {
        Colour::from_unit_channels(t.powi(3), t.powf(1.5), 0.3 + 0.7 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_dark_blue() {
        assert_eq!(OceanPalette.colour_at(0.0), Colour { r: 0, g: 0, b: 76 });
    }

    #[test]
    fn half_way_values() {
        assert_eq!(
            OceanPalette.colour_at(0.5),
            Colour {
                r: 31,
                g: 90,
                b: 165
            }
        );
    }

    #[test]
    fn blue_always_dominates() {
        for step in 0..100 {
            let colour = OceanPalette.colour_at(f64::from(step) / 100.0);
            assert!(colour.b >= colour.g);
            assert!(colour.g >= colour.r);
        }
    }
}

use crate::core::data::colour::{Colour, channel_from_scaled};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

/// Black, red, orange, yellow, white over four quarter-width segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirePalette;

impl Palette for FirePalette {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Fire
    }

    fn colour_at(&self, t: f64) -> Colour {
        if t < 0.25 {
            let local_t = t * 4.0;
            Colour {
                r: channel_from_scaled(255.0 * local_t),
                g: 0,
                b: 0,
            }
        } else if t < 0.5 {
            let local_t = (t - 0.25) * 4.0;
            Colour {
                r: 255,
                g: channel_from_scaled(165.0 * local_t),
                b: 0,
            }
        } else if t < 0.75 {
            let local_t = (t - 0.5) * 4.0;
            Colour {
                r: 255,
                g: channel_from_scaled(165.0 + 90.0 * local_t),
                b: channel_from_scaled(255.0 * local_t),
            }
        } else {
            // saturated; the last segment does not ramp
            Colour {
                r: 255,
                g: 255,
                b: 255,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_black() {
        assert_eq!(FirePalette.colour_at(0.0), Colour::BLACK);
    }

    #[test]
    fn quarter_is_red() {
        assert_eq!(FirePalette.colour_at(0.25), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn half_is_orange() {
        assert_eq!(
            FirePalette.colour_at(0.5),
            Colour {
                r: 255,
                g: 165,
                b: 0
            }
        );
    }

    #[test]
    fn third_segment_ramps_green_and_blue() {
        let colour = FirePalette.colour_at(0.625);

        assert_eq!(colour.r, 255);
        assert_eq!(colour.g, 210);
        assert_eq!(colour.b, 127);
    }

    #[test]
    fn last_segment_is_constant_white() {
        for t in [0.75, 0.8, 0.9, 0.999] {
            assert_eq!(
                FirePalette.colour_at(t),
                Colour {
                    r: 255,
                    g: 255,
                    b: 255
                }
            );
        }
    }

    #[test]
    fn first_segment_is_monotonic_in_red() {
        let mut previous = 0;
        for step in 0..25 {
            let colour = FirePalette.colour_at(f64::from(step) / 100.0);
            assert!(colour.r >= previous);
            previous = colour.r;
        }
    }
}

use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::mandelbrot::colour_mapping::maps::{
    classic::ClassicPalette, fire::FirePalette, grayscale::GrayscalePalette, ocean::OceanPalette,
    rainbow::RainbowPalette,
};
use crate::core::fractals::mandelbrot::colour_mapping::palette::Palette;

static CLASSIC: ClassicPalette = ClassicPalette;
static FIRE: FirePalette = FirePalette;
static OCEAN: OceanPalette = OceanPalette;
static RAINBOW: RainbowPalette = RainbowPalette;
static GRAYSCALE: GrayscalePalette = GrayscalePalette;

#[must_use]
pub fn palette_for(kind: ColourSchemeKind) -> &'static dyn Palette {
    match kind {
        ColourSchemeKind::Classic => &CLASSIC,
        ColourSchemeKind::Fire => &FIRE,
        ColourSchemeKind::Ocean => &OCEAN,
        ColourSchemeKind::Rainbow => &RAINBOW,
        ColourSchemeKind::Grayscale => &GRAYSCALE,
    }
}

use crate::core::data::fractal_bounds::FractalBounds;
use crate::core::data::fractal_preset::FractalPreset;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;

struct BuiltinPreset {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    bounds: FractalBounds,
    max_iterations: u32,
    colour_scheme: ColourSchemeKind,
}

const CANVAS_WIDTH: u32 = 800;
const CANVAS_HEIGHT: u32 = 600;

const BUILTIN_PRESETS: &[BuiltinPreset] = &[
    BuiltinPreset {
        id: "overview",
        name: "Overview",
        description: "Classic Mandelbrot set overview",
        bounds: FractalBounds::from_edges_unchecked(-2.5, 1.5, -1.5, 1.5),
        max_iterations: 100,
        colour_scheme: ColourSchemeKind::Classic,
    },
    BuiltinPreset {
        id: "seahorse-valley",
        name: "Seahorse Valley",
        description: "Beautiful seahorse-like structures",
        bounds: FractalBounds::from_edges_unchecked(-0.76, -0.74, 0.09, 0.11),
        max_iterations: 200,
        colour_scheme: ColourSchemeKind::Ocean,
    },
    BuiltinPreset {
        id: "lightning",
        name: "Lightning",
        description: "Electric lightning-like patterns",
        bounds: FractalBounds::from_edges_unchecked(-1.2515, -1.2495, 0.0195, 0.0215),
        max_iterations: 300,
        colour_scheme: ColourSchemeKind::Fire,
    },
    BuiltinPreset {
        id: "spiral",
        name: "Spiral Galaxy",
        description: "Spiral patterns resembling galaxies",
        bounds: FractalBounds::from_edges_unchecked(-0.17, -0.15, 1.03, 1.05),
        max_iterations: 250,
        colour_scheme: ColourSchemeKind::Rainbow,
    },
    BuiltinPreset {
        id: "elephant-valley",
        name: "Elephant Valley",
        description: "Elephant-like bulbous structures",
        bounds: FractalBounds::from_edges_unchecked(0.24, 0.26, -0.01, 0.01),
        max_iterations: 150,
        colour_scheme: ColourSchemeKind::Fire,
    },
    BuiltinPreset {
        id: "feather",
        name: "Feather",
        description: "Delicate feather-like fractals",
        bounds: FractalBounds::from_edges_unchecked(-0.236, -0.234, 0.826, 0.828),
        max_iterations: 400,
        colour_scheme: ColourSchemeKind::Classic,
    },
];

impl BuiltinPreset {
    fn to_preset(&self) -> FractalPreset {
        FractalPreset {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            bounds: self.bounds,
            max_iterations: self.max_iterations,
            colour_scheme: self.colour_scheme,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
        }
    }
}

#[must_use]
pub fn builtin_presets() -> Vec<FractalPreset> {
    BUILTIN_PRESETS.iter().map(BuiltinPreset::to_preset).collect()
}

#[must_use]
pub fn builtin_preset(id: &str) -> Option<FractalPreset> {
    BUILTIN_PRESETS
        .iter()
        .find(|preset| preset.id == id)
        .map(BuiltinPreset::to_preset)
}

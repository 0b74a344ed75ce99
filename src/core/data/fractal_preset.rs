use crate::core::data::fractal_bounds::FractalBounds;
use crate::core::data::fractal_config::FractalConfig;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A named, saved view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractalPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub bounds: FractalBounds,
    pub max_iterations: u32,
    pub colour_scheme: ColourSchemeKind,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl FractalPreset {
    /// User preset capturing `config`, with a `custom-<millis>` id.
    #[must_use]
    pub fn custom(
        name: impl Into<String>,
        description: impl Into<String>,
        config: &FractalConfig,
    ) -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();

        Self::from_config(format!("custom-{}", millis), name, description, config)
    }

    #[must_use]
    pub fn from_config(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        config: &FractalConfig,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            bounds: config.bounds,
            max_iterations: config.max_iterations,
            colour_scheme: config.colour_scheme,
            canvas_width: config.width,
            canvas_height: config.height,
        }
    }

    #[must_use]
    pub fn to_config(&self) -> FractalConfig {
        FractalConfig {
            bounds: self.bounds,
            max_iterations: self.max_iterations,
            width: self.canvas_width,
            height: self.canvas_height,
            colour_scheme: self.colour_scheme,
        }
    }
}

use crate::core::data::fractal_bounds::{FractalBounds, FractalBoundsError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

pub const DEFAULT_MAX_ITERATIONS: u32 = 100;
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalConfigError {
    ZeroMaxIterations,
    ZeroWidth,
    ZeroHeight,
    InvalidBounds(FractalBoundsError),
}

impl fmt::Display for FractalConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => write!(f, "maximum iterations must be greater than zero"),
            Self::ZeroWidth => write!(f, "render width must be greater than zero"),
            Self::ZeroHeight => write!(f, "render height must be greater than zero"),
            Self::InvalidBounds(err) => write!(f, "invalid bounds: {}", err),
        }
    }
}

impl Error for FractalConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidBounds(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FractalBoundsError> for FractalConfigError {
    fn from(err: FractalBoundsError) -> Self {
        Self::InvalidBounds(err)
    }
}

/// Everything one render needs. Immutable for the duration of the render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    pub bounds: FractalBounds,
    pub max_iterations: u32,
    pub width: u32,
    pub height: u32,
    pub colour_scheme: ColourSchemeKind,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            bounds: FractalBounds::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            colour_scheme: ColourSchemeKind::default(),
        }
    }
}

impl FractalConfig {
    pub fn validate(&self) -> Result<(), FractalConfigError> {
        if self.max_iterations == 0 {
            return Err(FractalConfigError::ZeroMaxIterations);
        }

        if self.width == 0 {
            return Err(FractalConfigError::ZeroWidth);
        }

        if self.height == 0 {
            return Err(FractalConfigError::ZeroHeight);
        }

        self.bounds.validate()?;

        Ok(())
    }

    #[must_use]
    pub fn total_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Same view at a different pixel-grid size.
    #[must_use]
    pub fn with_size(&self, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..*self
        }
    }
}

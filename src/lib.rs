pub mod controllers;
pub mod core;
pub mod presenters;
pub mod storage;

pub use crate::controllers::cli::args::{CliArgs, ConfigSource, parse_args};
pub use crate::controllers::cli::controller::{CliError, CliRenderController};
pub use crate::controllers::render::errors::RendererError;
pub use crate::controllers::render::ports::surface::{RenderSurface, SurfaceError, SurfaceFactoryPort};
pub use crate::controllers::render::renderer::{DEFAULT_PREVIEW_SCALE, FractalRenderer};
pub use crate::controllers::render::types::{RenderOutcome, RenderState};
pub use crate::controllers::zoom_pan::controller::ZoomPanController;
pub use crate::controllers::zoom_pan::state::ZoomPanState;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::fractal_bounds::{FractalBounds, FractalBoundsError};
pub use crate::core::data::fractal_config::{FractalConfig, FractalConfigError};
pub use crate::core::data::fractal_preset::FractalPreset;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::fractals::mandelbrot::algorithm::{
    IterationMode, escape_count, iterate, smooth_escape_count,
};
pub use crate::core::fractals::mandelbrot::colour_mapping::colour_map::colour_for;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::ColourSchemeKind;
pub use crate::presenters::file::ppm::PpmFilePresenter;
pub use crate::presenters::memory::surface::{MemorySurface, MemorySurfaceFactory};
pub use crate::storage::preset_store::{PresetStore, all_presets};

use crate::controllers::render::ports::surface::SurfaceError;
use crate::core::data::fractal_config::FractalConfigError;
use crate::core::data::pixel_buffer::PixelBufferError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RendererError {
    SurfaceUnavailable(SurfaceError),
    InvalidConfig(FractalConfigError),
    InvalidPreviewScale(f64),
    Frame(PixelBufferError),
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SurfaceUnavailable(err) => write!(f, "cannot create renderer: {}", err),
            Self::InvalidConfig(err) => write!(f, "invalid render config: {}", err),
            Self::InvalidPreviewScale(scale) => {
                write!(f, "preview scale must be positive and finite, got {}", scale)
            }
            Self::Frame(err) => write!(f, "frame error: {}", err),
        }
    }
}

impl Error for RendererError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SurfaceUnavailable(err) => Some(err),
            Self::InvalidConfig(err) => Some(err),
            Self::InvalidPreviewScale(_) => None,
            Self::Frame(err) => Some(err),
        }
    }
}

impl From<SurfaceError> for RendererError {
    fn from(err: SurfaceError) -> Self {
        Self::SurfaceUnavailable(err)
    }
}

impl From<FractalConfigError> for RendererError {
    fn from(err: FractalConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl From<PixelBufferError> for RendererError {
    fn from(err: PixelBufferError) -> Self {
        Self::Frame(err)
    }
}

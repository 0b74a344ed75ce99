use crate::core::data::pixel_buffer::PixelBuffer;
use std::error::Error;
use std::fmt;

/// Somewhere a painted frame can be shown.
pub trait RenderSurface: Send {
    fn present(&mut self, frame: &PixelBuffer);
}

/// Acquires the surface a renderer draws to for its whole lifetime.
pub trait SurfaceFactoryPort {
    type Surface: RenderSurface;

    fn acquire(&self) -> Result<Self::Surface, SurfaceError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    Unavailable(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(reason) => write!(f, "drawing surface unavailable: {}", reason),
        }
    }
}

impl Error for SurfaceError {}

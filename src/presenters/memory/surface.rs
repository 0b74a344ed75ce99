use crate::controllers::render::ports::surface::{RenderSurface, SurfaceError, SurfaceFactoryPort};
use crate::core::data::pixel_buffer::PixelBuffer;
use std::sync::{Arc, Mutex, PoisonError};

#[derive(Debug, Default)]
struct Presented {
    last_frame: Option<PixelBuffer>,
    count: usize,
}

/// Headless surface that keeps a copy of whatever was last presented.
#[derive(Debug, Default)]
pub struct MemorySurface {
    presented: Arc<Mutex<Presented>>,
}

impl MemorySurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access that stays valid after the surface moves into a renderer.
    #[must_use]
    pub fn handle(&self) -> MemorySurfaceHandle {
        MemorySurfaceHandle {
            presented: Arc::clone(&self.presented),
        }
    }
}

impl RenderSurface for MemorySurface {
    fn present(&mut self, frame: &PixelBuffer) {
        let mut presented = self
            .presented
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        match presented.last_frame.as_mut() {
            Some(last) if last.width() == frame.width() && last.height() == frame.height() => {
                last.clone_from(frame);
            }
            _ => presented.last_frame = Some(frame.clone()),
        }
        presented.count += 1;
    }
}

#[derive(Debug, Clone)]
pub struct MemorySurfaceHandle {
    presented: Arc<Mutex<Presented>>,
}

impl MemorySurfaceHandle {
    #[must_use]
    pub fn last_frame(&self) -> Option<PixelBuffer> {
        self.presented
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last_frame
            .clone()
    }

    #[must_use]
    pub fn present_count(&self) -> usize {
        self.presented
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .count
    }
}

/// Hands out one shared [`MemorySurface`]; every acquired surface reports to
/// the same handle.
#[derive(Debug, Default)]
pub struct MemorySurfaceFactory {
    presented: Arc<Mutex<Presented>>,
}

impl MemorySurfaceFactory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn handle(&self) -> MemorySurfaceHandle {
        MemorySurfaceHandle {
            presented: Arc::clone(&self.presented),
        }
    }
}

impl SurfaceFactoryPort for MemorySurfaceFactory {
    type Surface = MemorySurface;

    fn acquire(&self) -> Result<MemorySurface, SurfaceError> {
        Ok(MemorySurface {
            presented: Arc::clone(&self.presented),
        })
    }
}

use crate::controllers::render::errors::RendererError;
use crate::controllers::render::ports::surface::{RenderSurface, SurfaceFactoryPort};
use crate::controllers::render::types::{RenderOutcome, RenderState};
use crate::core::actions::cancellation::{CancelToken, GenerationToken};
use crate::core::actions::paint_frame::paint_frame::{Checkpoint, PaintFrameError, paint_frame};
use crate::core::data::fractal_config::FractalConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::mandelbrot::algorithm::{IterationMode, MandelbrotAlgorithm};
use crate::core::fractals::mandelbrot::colour_mapping::colour_map::MandelbrotColourMap;
use crate::core::util::calculate_chunk_size::calculate_chunk_size;
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread;
use std::time::Instant;

pub const DEFAULT_PREVIEW_SCALE: f64 = 0.25;

/// Holds the renderer in `Rendering` until dropped, including on unwind.
struct RenderingGuard<'a>(&'a AtomicBool);

impl<'a> RenderingGuard<'a> {
    fn enter(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Release);
        Self(flag)
    }
}

impl Drop for RenderingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

struct Frame<S> {
    pixels: PixelBuffer,
    preview: PixelBuffer,
    surface: S,
}

/// Progressive Mandelbrot renderer bound to one drawing surface.
///
/// Every request takes a new generation number. Issuing a request cancels
/// whatever render is in flight, then waits on the frame lock until that
/// render has stopped writing. Only the newest generation ever reaches the
/// surface.
pub struct FractalRenderer<S: RenderSurface> {
    generation: Arc<AtomicU64>,
    last_completed_generation: AtomicU64,
    rendering: AtomicBool,
    frame: Mutex<Frame<S>>,
}

impl<S: RenderSurface> FractalRenderer<S> {
    pub fn new<F>(factory: &F) -> Result<Self, RendererError>
    where
        F: SurfaceFactoryPort<Surface = S>,
    {
        let surface = factory.acquire()?;

        Ok(Self {
            generation: Arc::new(AtomicU64::new(0)),
            last_completed_generation: AtomicU64::new(0),
            rendering: AtomicBool::new(false),
            frame: Mutex::new(Frame {
                pixels: PixelBuffer::new(0, 0),
                preview: PixelBuffer::new(0, 0),
                surface,
            }),
        })
    }

    /// Full-resolution render with smooth colouring.
    pub fn render<P>(
        &self,
        config: &FractalConfig,
        on_progress: P,
    ) -> Result<RenderOutcome, RendererError>
    where
        P: FnMut(f64),
    {
        self.render_with_mode(config, IterationMode::Smooth, on_progress)
    }

    pub fn render_with_mode<P>(
        &self,
        config: &FractalConfig,
        mode: IterationMode,
        mut on_progress: P,
    ) -> Result<RenderOutcome, RendererError>
    where
        P: FnMut(f64),
    {
        config.validate()?;

        let token = self.issue();
        let generation = token.generation();
        let mut frame = self.lock_frame();

        if token.is_cancelled() {
            debug!("render {} superseded before it started", generation);
            return Ok(RenderOutcome::Cancelled { generation });
        }

        debug!(
            "render {} started: {}x{}, {} iterations, {}",
            generation, config.width, config.height, config.max_iterations, config.colour_scheme
        );

        let start = Instant::now();
        let _rendering = RenderingGuard::enter(&self.rendering);

        let Frame {
            pixels, surface, ..
        } = &mut *frame;
        pixels.resize(config.width, config.height);

        let algorithm = MandelbrotAlgorithm::new(config, mode);
        let colour_map = MandelbrotColourMap::new(config.colour_scheme, config.max_iterations);
        let chunk_size = calculate_chunk_size(config.total_pixels());

        let result = paint_frame(
            &algorithm,
            &colour_map,
            pixels,
            chunk_size,
            &token,
            |checkpoint: Checkpoint<'_>| {
                if token.is_cancelled() {
                    return;
                }

                trace!(
                    "render {} checkpoint: {} rows, {:.3}",
                    generation, checkpoint.rows_done, checkpoint.progress
                );
                surface.present(checkpoint.frame);
                on_progress(checkpoint.progress);
                thread::yield_now();
            },
        );

        self.finish(&token, result, start)
    }

    /// Quick low-resolution pass: renders at `scale` of the configured size in
    /// discrete mode, stretches the result over the frame and presents it once.
    pub fn render_preview(
        &self,
        config: &FractalConfig,
        scale: f64,
    ) -> Result<RenderOutcome, RendererError> {
        config.validate()?;

        if !(scale.is_finite() && scale > 0.0) {
            return Err(RendererError::InvalidPreviewScale(scale));
        }

        let preview_width = scaled_dimension(config.width, scale);
        let preview_height = scaled_dimension(config.height, scale);
        let preview_config = config.with_size(preview_width, preview_height);

        let token = self.issue();
        let generation = token.generation();
        let mut frame = self.lock_frame();

        if token.is_cancelled() {
            debug!("preview {} superseded before it started", generation);
            return Ok(RenderOutcome::Cancelled { generation });
        }

        debug!(
            "preview {} started: {}x{} upscaled to {}x{}",
            generation, preview_width, preview_height, config.width, config.height
        );

        let start = Instant::now();
        let _rendering = RenderingGuard::enter(&self.rendering);

        let Frame {
            pixels,
            preview,
            surface,
        } = &mut *frame;
        preview.resize(preview_width, preview_height);

        let algorithm = MandelbrotAlgorithm::new(&preview_config, IterationMode::Discrete);
        let colour_map = MandelbrotColourMap::new(config.colour_scheme, config.max_iterations);
        let chunk_size = calculate_chunk_size(preview_config.total_pixels());

        let result = paint_frame(&algorithm, &colour_map, preview, chunk_size, &token, |_| {});

        if result.is_ok() && !token.is_cancelled() {
            pixels.resize(config.width, config.height);
            preview.upscale_nearest_into(pixels);
            surface.present(pixels);
        }

        self.finish(&token, result, start)
    }

    /// Supersedes the in-flight render, if any, without issuing a new one.
    pub fn cancel(&self) {
        let superseded = self.generation.fetch_add(1, Ordering::AcqRel);
        debug!("cancel requested, superseding generation {}", superseded);
    }

    #[must_use]
    pub fn state(&self) -> RenderState {
        if self.rendering.load(Ordering::Acquire) {
            RenderState::Rendering
        } else {
            RenderState::Idle
        }
    }

    #[must_use]
    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.last_completed_generation.load(Ordering::Acquire)
    }

    /// Copy of the frame as it stands. Waits for any in-flight render.
    #[must_use]
    pub fn snapshot(&self) -> PixelBuffer {
        self.lock_frame().pixels.clone()
    }

    fn issue(&self) -> GenerationToken {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;

        GenerationToken::new(Arc::clone(&self.generation), generation)
    }

    fn lock_frame(&self) -> MutexGuard<'_, Frame<S>> {
        self.frame.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn finish(
        &self,
        token: &GenerationToken,
        result: Result<(), PaintFrameError>,
        start: Instant,
    ) -> Result<RenderOutcome, RendererError> {
        let generation = token.generation();

        match result {
            Ok(()) if !token.is_cancelled() => {
                let duration = start.elapsed();
                self.last_completed_generation
                    .store(generation, Ordering::Release);
                debug!("render {} completed in {:?}", generation, duration);

                Ok(RenderOutcome::Completed {
                    generation,
                    duration,
                })
            }
            Ok(()) | Err(PaintFrameError::Cancelled(_)) => {
                debug!("render {} cancelled after {:?}", generation, start.elapsed());

                Ok(RenderOutcome::Cancelled { generation })
            }
            Err(PaintFrameError::PixelBuffer(err)) => Err(err.into()),
        }
    }
}

fn scaled_dimension(size: u32, scale: f64) -> u32 {
    let scaled = (f64::from(size) * scale).floor();

    if scaled < 1.0 {
        1
    } else {
        scaled.min(f64::from(u32::MAX)) as u32
    }
}

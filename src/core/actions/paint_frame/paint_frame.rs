use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::compute_scanline::compute_scanline::compute_scanline;
use crate::core::actions::compute_scanline::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::paint_frame::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
use std::error::Error;
use std::fmt;

/// Scanlines painted between two checkpoints.
pub const CHECKPOINT_INTERVAL_LINES: u32 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintFrameError {
    Cancelled(Cancelled),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for PaintFrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for PaintFrameError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for PaintFrameError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<Cancelled> for PaintFrameError {
    fn from(c: Cancelled) -> Self {
        Self::Cancelled(c)
    }
}

/// A partially (or fully) painted frame handed out between scanlines.
#[derive(Debug)]
pub struct Checkpoint<'a> {
    pub frame: &'a PixelBuffer,
    pub rows_done: u32,
    pub progress: f64,
}

/// Paints `frame` top to bottom, one scanline at a time.
///
/// Cancellation is polled before each scanline; once it fires nothing more is
/// written. After every [`CHECKPOINT_INTERVAL_LINES`]th scanline, and after
/// the last one, `on_checkpoint` sees the frame so far together with the
/// fraction of pixels done. The final checkpoint always reports `1.0`.
pub fn paint_frame<Alg, Map, C, F>(
    algorithm: &Alg,
    colour_map: &Map,
    frame: &mut PixelBuffer,
    chunk_size: usize,
    cancel: &C,
    mut on_checkpoint: F,
) -> Result<(), PaintFrameError>
where
    Alg: FractalAlgorithm + ?Sized,
    Map: ColourMap + ?Sized,
    C: CancelToken + ?Sized,
    F: FnMut(Checkpoint<'_>),
{
    let width = frame.width();
    let height = frame.height();
    let total_pixels = u64::from(width) * u64::from(height);

    for y in 0..height {
        if cancel.is_cancelled() {
            return Err(Cancelled.into());
        }

        let points = compute_scanline(algorithm, y, width, chunk_size);
        let row = frame.row_mut(y)?;

        for (pixel, point) in row.chunks_exact_mut(BYTES_PER_PIXEL).zip(points) {
            let colour = colour_map.map(point.iterations);
            pixel.copy_from_slice(&[colour.r, colour.g, colour.b, 255]);
        }

        let is_last = y + 1 == height;
        if y % CHECKPOINT_INTERVAL_LINES == 0 || is_last {
            let processed = u64::from(y + 1) * u64::from(width);
            on_checkpoint(Checkpoint {
                frame: &*frame,
                rows_done: y + 1,
                progress: processed as f64 / total_pixels as f64,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::colour::Colour;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct RowIndex;

    impl FractalAlgorithm for RowIndex {
        fn compute(&self, _x: u32, y: u32) -> f64 {
            f64::from(y)
        }
    }

    struct RedChannel;

    impl ColourMap for RedChannel {
        fn map(&self, iterations: f64) -> Colour {
            Colour {
                r: iterations as u8,
                g: 0,
                b: 0,
            }
        }

        fn display_name(&self) -> &str {
            "red"
        }
    }

    #[test]
    fn every_pixel_is_painted_opaque() {
        let mut frame = PixelBuffer::new(4, 3);

        paint_frame(&RowIndex, &RedChannel, &mut frame, 2, &NeverCancel, |_| {}).unwrap();

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(frame.pixel(x, y).unwrap(), [y as u8, 0, 0, 255]);
            }
        }
    }

    #[test]
    fn checkpoints_every_ten_lines_and_at_the_end() {
        let mut frame = PixelBuffer::new(5, 25);
        let mut seen = Vec::new();

        paint_frame(&RowIndex, &RedChannel, &mut frame, 1, &NeverCancel, |cp| {
            seen.push((cp.rows_done, cp.progress));
        })
        .unwrap();

        let rows: Vec<u32> = seen.iter().map(|(rows, _)| *rows).collect();
        assert_eq!(rows, vec![1, 11, 21, 25]);
        assert_eq!(seen.last().map(|(_, p)| *p), Some(1.0));
    }

    #[test]
    fn progress_is_monotonic() {
        let mut frame = PixelBuffer::new(8, 47);
        let mut progress = Vec::new();

        paint_frame(&RowIndex, &RedChannel, &mut frame, 3, &NeverCancel, |cp| {
            progress.push(cp.progress);
        })
        .unwrap();

        assert!(progress.windows(2).all(|w| w[0] < w[1]));
        assert!(progress.iter().all(|p| *p > 0.0 && *p <= 1.0));
    }

    #[test]
    fn single_line_frame_reports_once() {
        let mut frame = PixelBuffer::new(3, 1);
        let mut calls = 0;

        paint_frame(&RowIndex, &RedChannel, &mut frame, 1, &NeverCancel, |cp| {
            calls += 1;
            assert_eq!(cp.progress, 1.0);
        })
        .unwrap();

        assert_eq!(calls, 1);
    }

    #[test]
    fn cancellation_stops_before_next_scanline() {
        let mut frame = PixelBuffer::new(4, 30);
        let polls = AtomicU32::new(0);
        // allow the first 12 scanlines, then cancel
        let cancel = || polls.fetch_add(1, Ordering::Relaxed) >= 12;
        let mut last_rows = 0;

        let result = paint_frame(&RowIndex, &RedChannel, &mut frame, 4, &cancel, |cp| {
            last_rows = cp.rows_done;
        });

        assert_eq!(result, Err(PaintFrameError::Cancelled(Cancelled)));
        assert_eq!(last_rows, 11);
        assert_eq!(frame.pixel(0, 11).unwrap(), [11, 0, 0, 255]);
        assert_eq!(frame.pixel(0, 12).unwrap(), [0, 0, 0, 0]);
    }

    #[test]
    fn already_cancelled_paints_nothing() {
        let mut frame = PixelBuffer::new(4, 4);
        let mut calls = 0;

        let result = paint_frame(&RowIndex, &RedChannel, &mut frame, 4, &|| true, |_| calls += 1);

        assert!(matches!(result, Err(PaintFrameError::Cancelled(_))));
        assert_eq!(calls, 0);
        assert!(frame.buffer().iter().all(|b| *b == 0));
    }
}

use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 4;

const OPAQUE: u8 = 255;

fn buffer_size_for(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of RGBA data, got {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA frame, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size_for(width, height)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = buffer_size_for(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Reallocates to new dimensions. Existing contents are discarded.
    ///
    /// Returns `true` when the dimensions actually changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if self.width == width && self.height == height {
            return false;
        }

        self.width = width;
        self.height = height;
        self.buffer = vec![0; buffer_size_for(width, height)];

        true
    }

    fn index_of(&self, x: u32, y: u32) -> Result<usize, PixelBufferError> {
        if x >= self.width || y >= self.height {
            return Err(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }

    /// Writes an opaque pixel.
    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(x, y)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;
        self.buffer[index + 3] = OPAQUE;

        Ok(())
    }

    pub fn pixel(&self, x: u32, y: u32) -> Result<[u8; 4], PixelBufferError> {
        let index = self.index_of(x, y)?;

        Ok([
            self.buffer[index],
            self.buffer[index + 1],
            self.buffer[index + 2],
            self.buffer[index + 3],
        ])
    }

    /// Mutable view of one scanline's RGBA bytes.
    pub fn row_mut(&mut self, y: u32) -> Result<&mut [u8], PixelBufferError> {
        let start = self.index_of(0, y)?;
        let end = start + self.width as usize * BYTES_PER_PIXEL;

        Ok(&mut self.buffer[start..end])
    }

    /// Nearest-neighbour scale of `self` onto every pixel of `target`.
    pub fn upscale_nearest_into(&self, target: &mut PixelBuffer) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let target_width = target.width as usize;
        let source_width = self.width as usize;

        for ty in 0..target.height {
            let sy = (u64::from(ty) * u64::from(self.height) / u64::from(target.height)) as usize;
            let source_row = sy * source_width * BYTES_PER_PIXEL;
            let target_row = ty as usize * target_width * BYTES_PER_PIXEL;

            for tx in 0..target_width {
                let sx = tx * source_width / target_width;
                let src = source_row + sx * BYTES_PER_PIXEL;
                let dst = target_row + tx * BYTES_PER_PIXEL;

                target.buffer[dst..dst + BYTES_PER_PIXEL]
                    .copy_from_slice(&self.buffer[src..src + BYTES_PER_PIXEL]);
            }
        }
    }

    /// RGB bytes with alpha dropped, for formats without an alpha channel.
    #[must_use]
    pub fn to_rgb(&self) -> Vec<u8> {
        self.buffer
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }
}

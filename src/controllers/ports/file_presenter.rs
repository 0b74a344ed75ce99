use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a finished frame somewhere on disk.
pub trait FilePresenterPort {
    fn present(&self, frame: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;
}

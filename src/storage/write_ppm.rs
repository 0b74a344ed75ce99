use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Binary PPM (P6). Alpha is dropped.
pub fn write_ppm_to<W: Write>(buffer: &PixelBuffer, mut writer: W) -> io::Result<()> {
    // P6 means binary RGB, then width height max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&buffer.to_rgb())?;
    writer.flush()
}

/// Writes `buffer` to `filepath`, creating missing parent directories.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = fs::File::create(filepath)?;
    write_ppm_to(buffer, BufWriter::new(file))
}

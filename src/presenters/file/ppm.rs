use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::storage::write_ppm::write_ppm;
use log::info;
use std::path::Path;

#[derive(Debug, Default)]
pub struct PpmFilePresenter;

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        write_ppm(frame, filepath)?;
        info!(
            "wrote {}x{} frame to {}",
            frame.width(),
            frame.height(),
            filepath.display()
        );

        Ok(())
    }
}

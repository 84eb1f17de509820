use std::path::Path;

use crate::imaging::domain::image_reader::ImageReader;
use crate::shared::error::FilterError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Reads image files with the `image` crate.
///
/// The format is sniffed from the file contents (falling back to the
/// extension), and every decoded image is converted to straight RGBA8.
/// The file handle is released before `read` returns.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<PixelBuffer, FilterError> {
        let open_error = |source| FilterError::SourceOpen {
            path: path.to_path_buf(),
            source,
        };

        let decoded = image::ImageReader::open(path)
            .map_err(open_error)?
            .with_guessed_format()
            .map_err(open_error)?
            .decode()
            .map_err(|source| FilterError::Decode {
                path: path.to_path_buf(),
                source,
            })?;

        let rgba = decoded.into_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("Decoded {} ({width}x{height})", path.display());
        Ok(PixelBuffer::from_raw(rgba.into_raw(), width, height))
    }
}

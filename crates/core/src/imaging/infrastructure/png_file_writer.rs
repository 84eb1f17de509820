use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageError};

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::error::FilterError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Writes pixel buffers as PNG, whatever the destination extension says.
///
/// Parent directories are not created; a missing directory is a
/// [`FilterError::DestCreate`].
pub struct PngFileWriter;

impl PngFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PngFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for PngFileWriter {
    fn write(&self, path: &Path, buffer: &PixelBuffer) -> Result<(), FilterError> {
        let encode_error = |source| FilterError::Encode {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(|source| FilterError::DestCreate {
            path: path.to_path_buf(),
            source,
        })?;
        let mut out = BufWriter::new(file);

        PngEncoder::new(&mut out)
            .write_image(
                buffer.data(),
                buffer.width(),
                buffer.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(encode_error)?;
        out.flush()
            .map_err(|e| encode_error(ImageError::IoError(e)))?;

        log::debug!(
            "Encoded {}x{} PNG to {}",
            buffer.width(),
            buffer.height(),
            path.display()
        );
        Ok(())
    }
}

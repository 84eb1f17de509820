use std::path::Path;

use crate::shared::error::FilterError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Decodes a raster image into an RGBA pixel buffer.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<PixelBuffer, FilterError>;

    /// Image bounds as `(width, height)`. Nothing stays open afterwards.
    fn dimensions(&self, path: &Path) -> Result<(u32, u32), FilterError> {
        Ok(self.read(path)?.dimensions())
    }
}

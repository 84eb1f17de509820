use std::path::Path;

use crate::shared::error::FilterError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Encodes a pixel buffer to an image file, creating or truncating it.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, buffer: &PixelBuffer) -> Result<(), FilterError>;
}

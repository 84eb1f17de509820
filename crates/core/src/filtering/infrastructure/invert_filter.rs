use crate::filtering::domain::pixel_filter::PixelFilter;
use crate::shared::error::FilterError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Replaces every color channel with its complement; alpha is kept.
pub struct InvertFilter;

impl PixelFilter for InvertFilter {
    fn name(&self) -> &'static str {
        "invert"
    }

    fn apply(&mut self, source: &PixelBuffer) -> Result<PixelBuffer, FilterError> {
        Ok(source.map_pixels(|[r, g, b, a]| [255 - r, 255 - g, 255 - b, a]))
    }
}

use crate::shared::error::FilterError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Domain interface for a whole-image pixel transform.
///
/// Implementations read `source` only and return a freshly allocated
/// buffer of the same dimensions. `&mut self` lets randomised filters
/// advance their own generator without any shared state.
pub trait PixelFilter: Send {
    fn name(&self) -> &'static str;

    fn apply(&mut self, source: &PixelBuffer) -> Result<PixelBuffer, FilterError>;
}

use crate::filtering::domain::pixel_filter::PixelFilter;
use crate::shared::constants::{LUMA_BLUE, LUMA_GREEN, LUMA_RED};
use crate::shared::error::FilterError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Luma-weighted grayscale.
///
/// Each channel is widened to 16 bits, weighted, truncated back to 8 bits
/// and only then summed. This truncate-then-sum order loses up to two
/// levels against a single rounding of the full sum, and that loss is part
/// of the expected output (pure red maps to 76, mid-gray 76 maps to 74).
pub struct GrayscaleFilter;

impl GrayscaleFilter {
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        // The weights sum to 1, so the three truncated terms never exceed 255.
        weighted_channel(r, LUMA_RED)
            + weighted_channel(g, LUMA_GREEN)
            + weighted_channel(b, LUMA_BLUE)
    }
}

fn weighted_channel(value: u8, weight: f64) -> u8 {
    let wide = u32::from(value) * 0x101;
    ((f64::from(wide) * weight) as u32 >> 8) as u8
}

impl PixelFilter for GrayscaleFilter {
    fn name(&self) -> &'static str {
        "grayscale"
    }

    fn apply(&mut self, source: &PixelBuffer) -> Result<PixelBuffer, FilterError> {
        Ok(source.map_pixels(|[r, g, b, a]| {
            let gray = Self::luma(r, g, b);
            [gray, gray, gray, a]
        }))
    }
}

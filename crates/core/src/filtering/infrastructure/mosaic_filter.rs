use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::filtering::domain::neighborhood_sampler::{check_block_size, sample_point};
use crate::filtering::domain::pixel_filter::PixelFilter;
use crate::shared::error::FilterError;
use crate::shared::pixel_buffer::PixelBuffer;
use crate::shared::region::Region;

/// Pixelates a rectangular region with flat `block_size` cells.
///
/// The output starts as an exact copy of the source. Each cell whose
/// origin lies inside the region is then painted with one color, read
/// from a jittered point inside the cell (same edge clamp as the frosted
/// glass filter, against the image rather than the region). The last cell
/// in a row or column may overhang the region end; it is clipped only at
/// the image edge.
pub struct MosaicFilter<R = StdRng> {
    block_size: u32,
    region: Region,
    rng: R,
}

impl MosaicFilter<StdRng> {
    /// Seeds a fresh generator from the operating system.
    pub fn new(block_size: u32, region: Region) -> Result<Self, FilterError> {
        Self::with_rng(block_size, region, StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> MosaicFilter<R> {
    pub fn with_rng(block_size: u32, region: Region, rng: R) -> Result<Self, FilterError> {
        Ok(Self {
            block_size: check_block_size(block_size)?,
            region,
            rng,
        })
    }
}

impl<R: Rng + Send> PixelFilter for MosaicFilter<R> {
    fn name(&self) -> &'static str {
        "mosaic"
    }

    fn apply(&mut self, source: &PixelBuffer) -> Result<PixelBuffer, FilterError> {
        let bounds = source.dimensions();
        self.region.validate(bounds.0, bounds.1)?;

        let mut out = source.clone();
        let mut cells = 0usize;
        for origin in self.region.block_origins(self.block_size) {
            let (sx, sy) = sample_point(&mut self.rng, origin, self.block_size, bounds);
            let color = source.pixel(sx, sy);
            out.fill_rect(origin.0, origin.1, self.block_size, self.block_size, color);
            cells += 1;
        }

        log::debug!(
            "Mosaic painted {} cells of size {} in {:?}",
            cells,
            self.block_size,
            self.region
        );
        Ok(out)
    }
}

use std::fmt;

use crate::filtering::domain::pixel_filter::PixelFilter;
use crate::shared::error::FilterError;
use crate::shared::region::Region;

use super::frosted_glass_filter::FrostedGlassFilter;
use super::grayscale_filter::GrayscaleFilter;
use super::invert_filter::InvertFilter;
use super::mosaic_filter::MosaicFilter;

/// The available filters and their parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterKind {
    Invert,
    Grayscale,
    FrostedGlass { block_size: u32 },
    Mosaic { block_size: u32, region: Region },
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKind::Invert => f.write_str("invert"),
            FilterKind::Grayscale => f.write_str("grayscale"),
            FilterKind::FrostedGlass { block_size } => {
                write!(f, "frosted glass (block {block_size})")
            }
            FilterKind::Mosaic { block_size, region } => write!(
                f,
                "mosaic (block {block_size}, x {}..{}, y {}..{})",
                region.x_start, region.x_end, region.y_start, region.y_end
            ),
        }
    }
}

/// Builds the filter for `kind`, validating its parameters up front.
///
/// Randomised filters get their own OS-seeded generator, so every call
/// produces an independent result. Region bounds can only be checked
/// against an image and are validated when the filter runs.
pub fn create_filter(kind: FilterKind) -> Result<Box<dyn PixelFilter>, FilterError> {
    log::debug!("Creating {kind} filter");
    let filter: Box<dyn PixelFilter> = match kind {
        FilterKind::Invert => Box::new(InvertFilter),
        FilterKind::Grayscale => Box::new(GrayscaleFilter),
        FilterKind::FrostedGlass { block_size } => Box::new(FrostedGlassFilter::new(block_size)?),
        FilterKind::Mosaic { block_size, region } => {
            Box::new(MosaicFilter::new(block_size, region)?)
        }
    };
    Ok(filter)
}

use crate::shared::error::{Axis, FilterError};

/// A rectangular pixel range targeted by the mosaic filter.
///
/// Ends are exclusive. A region whose start exceeds its end on an axis is
/// empty rather than invalid; only the image bounds are enforced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x_start: u32,
    pub x_end: u32,
    pub y_start: u32,
    pub y_end: u32,
}

impl Region {
    pub fn new(x_start: u32, x_end: u32, y_start: u32, y_end: u32) -> Self {
        Self {
            x_start,
            x_end,
            y_start,
            y_end,
        }
    }

    /// The region covering a whole `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, width, 0, height)
    }

    /// Checks that every coordinate lies within `[0, width]` x `[0, height]`.
    ///
    /// An end equal to the image extent is legal; anything greater is not.
    pub fn validate(&self, width: u32, height: u32) -> Result<(), FilterError> {
        if self.x_start > width || self.x_end > width {
            return Err(FilterError::RegionOutOfRange {
                axis: Axis::X,
                start: self.x_start,
                end: self.x_end,
                limit: width,
            });
        }
        if self.y_start > height || self.y_end > height {
            return Err(FilterError::RegionOutOfRange {
                axis: Axis::Y,
                start: self.y_start,
                end: self.y_end,
                limit: height,
            });
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.x_start >= self.x_end || self.y_start >= self.y_end
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x_start..self.x_end).contains(&x) && (self.y_start..self.y_end).contains(&y)
    }

    /// Top-left corners of the `block_size` cells tiling the region,
    /// column by column (x outer, y inner).
    ///
    /// `block_size` must be non-zero.
    pub fn block_origins(&self, block_size: u32) -> impl Iterator<Item = (u32, u32)> {
        let step = block_size as usize;
        let (y_start, y_end) = (self.y_start, self.y_end);
        (self.x_start..self.x_end)
            .step_by(step)
            .flat_map(move |x| (y_start..y_end).step_by(step).map(move |y| (x, y)))
    }
}

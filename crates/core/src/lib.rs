//! Pixel-level image filters: color inversion, grayscale, a randomised
//! frosted-glass blur and block mosaic over a rectangular region.
//!
//! The [`operations`] functions are the file-to-file entry points. The
//! layers underneath (`imaging`, `filtering`, `pipeline`) can be used
//! directly to filter in-memory [`PixelBuffer`]s or to inject a seeded
//! generator.

pub mod filtering;
pub mod imaging;
pub mod operations;
pub mod pipeline;
pub mod shared;

pub use operations::{
    apply_frosted_glass, apply_mosaic, image_dimensions, image_height, image_width,
    invert_colors, to_grayscale,
};
pub use shared::error::FilterError;
pub use shared::pixel_buffer::PixelBuffer;
pub use shared::region::Region;

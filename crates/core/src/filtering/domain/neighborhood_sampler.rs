use rand::Rng;

use crate::shared::error::FilterError;

/// Rejects a zero block size before any sampling happens.
pub fn check_block_size(block_size: u32) -> Result<u32, FilterError> {
    if block_size == 0 {
        return Err(FilterError::InvalidBlockSize(block_size));
    }
    Ok(block_size)
}

/// Picks a random coordinate along one axis inside the `block_size`
/// neighborhood that starts at `origin`.
///
/// The draw is uniform in `[origin, origin + block_size)`. When that range
/// would run past `extent`, the range shrinks to `[origin, extent)` so the
/// result is always a valid index. Requires `origin < extent` and a
/// non-zero `block_size`.
pub fn sample_coordinate<R: Rng>(
    rng: &mut R,
    origin: u32,
    block_size: u32,
    extent: u32,
) -> u32 {
    debug_assert!(origin < extent, "origin {origin} outside extent {extent}");
    debug_assert!(block_size > 0, "block size must be positive");
    let span = block_size.min(extent - origin);
    origin + rng.random_range(0..span)
}

/// Two-dimensional [`sample_coordinate`]: x is drawn before y.
pub fn sample_point<R: Rng>(
    rng: &mut R,
    (x, y): (u32, u32),
    block_size: u32,
    (width, height): (u32, u32),
) -> (u32, u32) {
    let sx = sample_coordinate(rng, x, block_size, width);
    let sy = sample_coordinate(rng, y, block_size, height);
    (sx, sy)
}

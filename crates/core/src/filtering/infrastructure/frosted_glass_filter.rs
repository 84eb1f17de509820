use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::filtering::domain::neighborhood_sampler::{check_block_size, sample_point};
use crate::filtering::domain::pixel_filter::PixelFilter;
use crate::shared::error::FilterError;
use crate::shared::pixel_buffer::PixelBuffer;

/// Randomised neighborhood blur.
///
/// Every output pixel copies a random source pixel from the
/// `block_size` x `block_size` square to its lower right. Near the right
/// and bottom edges the square shrinks so samples never leave the image.
pub struct FrostedGlassFilter<R = StdRng> {
    block_size: u32,
    rng: R,
}

impl FrostedGlassFilter<StdRng> {
    /// Seeds a fresh generator from the operating system.
    pub fn new(block_size: u32) -> Result<Self, FilterError> {
        Self::with_rng(block_size, StdRng::from_os_rng())
    }
}

impl<R: Rng + Send> FrostedGlassFilter<R> {
    pub fn with_rng(block_size: u32, rng: R) -> Result<Self, FilterError> {
        Ok(Self {
            block_size: check_block_size(block_size)?,
            rng,
        })
    }
}

impl<R: Rng + Send> PixelFilter for FrostedGlassFilter<R> {
    fn name(&self) -> &'static str {
        "frosted glass"
    }

    fn apply(&mut self, source: &PixelBuffer) -> Result<PixelBuffer, FilterError> {
        let bounds = source.dimensions();
        let (width, height) = bounds;
        let mut out = PixelBuffer::new(width, height);

        for x in 0..width {
            for y in 0..height {
                let (sx, sy) = sample_point(&mut self.rng, (x, y), self.block_size, bounds);
                out.put_pixel(x, y, source.pixel(sx, sy));
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Every pixel encodes its own coordinates, so a sampled color
    /// identifies where it was read from.
    fn coordinate_image(width: u32, height: u32) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                buffer.put_pixel(x, y, [x as u8, y as u8, 0, 255]);
            }
        }
        buffer
    }

    fn seeded(block_size: u32, seed: u64) -> FrostedGlassFilter<StdRng> {
        FrostedGlassFilter::with_rng(block_size, StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_zero_block_size_rejected() {
        assert!(matches!(
            FrostedGlassFilter::new(0),
            Err(FilterError::InvalidBlockSize(0))
        ));
    }

    #[test]
    fn test_block_size_one_is_identity() {
        let source = coordinate_image(12, 7);
        let out = seeded(1, 5).apply(&source).unwrap();
        assert_eq!(out, source);
    }

    #[rstest]
    #[case::small_block(20, 15, 3)]
    #[case::block_equals_width(20, 15, 20)]
    #[case::block_larger_than_image(6, 4, 50)]
    #[case::single_column(1, 30, 8)]
    #[case::single_pixel(1, 1, 8)]
    fn test_samples_come_from_clamped_neighborhood(
        #[case] width: u32,
        #[case] height: u32,
        #[case] block_size: u32,
    ) {
        let source = coordinate_image(width, height);
        for seed in 0..5 {
            let out = seeded(block_size, seed).apply(&source).unwrap();
            assert_eq!(out.dimensions(), (width, height));
            for y in 0..height {
                for x in 0..width {
                    let [sx, sy, _, a] = out.pixel(x, y);
                    let (sx, sy) = (u32::from(sx), u32::from(sy));
                    assert_eq!(a, 255);
                    assert!(sx >= x && sx < (x + block_size).min(width));
                    assert!(sy >= y && sy < (y + block_size).min(height));
                }
            }
        }
    }

    #[test]
    fn test_output_actually_scrambles_pixels() {
        let source = coordinate_image(32, 32);
        let out = seeded(4, 11).apply(&source).unwrap();
        let moved = (0..32)
            .flat_map(|y| (0..32).map(move |x| (x, y)))
            .filter(|&(x, y)| out.pixel(x, y) != source.pixel(x, y))
            .count();
        // A pixel keeps its own color with probability 1/16 away from the edges.
        assert!(moved > 32 * 32 / 2, "only {moved} pixels changed");
    }

    #[test]
    fn test_same_seed_same_output() {
        let source = coordinate_image(16, 16);
        let a = seeded(3, 99).apply(&source).unwrap();
        let b = seeded(3, 99).apply(&source).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_alpha_travels_with_sample() {
        let mut source = PixelBuffer::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                source.put_pixel(x, y, [x as u8, y as u8, 7, (x * 16 + y) as u8]);
            }
        }
        let out = seeded(3, 2).apply(&source).unwrap();
        for y in 0..8 {
            for x in 0..8 {
                let [sx, sy, b, a] = out.pixel(x, y);
                assert_eq!(b, 7);
                assert_eq!(a, sx * 16 + sy);
            }
        }
    }

    #[test]
    fn test_os_seeded_filter_keeps_flat_image() {
        let source = PixelBuffer::filled(5, 5, [1, 2, 3, 40]);
        let out = FrostedGlassFilter::new(3).unwrap().apply(&source).unwrap();
        assert_eq!(out, source);
    }
}

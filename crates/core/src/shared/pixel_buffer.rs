/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// An RGBA pixel, 8 bits per channel, straight (non-premultiplied) alpha.
pub type Rgba = [u8; CHANNELS];

/// A width x height raster of RGBA bytes in row-major order.
///
/// Codec conversion happens at the I/O boundary only; filters read and
/// write pixels through `(x, y)` accessors and never see file formats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Allocates a fully transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0; Self::byte_len(width, height)],
            width,
            height,
        }
    }

    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            Self::byte_len(width, height),
            "data length must equal width * height * 4"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Builds a buffer where every pixel has the same color.
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let data = color
            .iter()
            .copied()
            .cycle()
            .take(Self::byte_len(width, height))
            .collect();
        Self::from_raw(data, width, height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&color);
    }

    /// Returns a new buffer of the same size with `f` applied to every pixel.
    pub fn map_pixels<F>(&self, mut f: F) -> PixelBuffer
    where
        F: FnMut(Rgba) -> Rgba,
    {
        let mut out = PixelBuffer::new(self.width, self.height);
        for (src, dst) in self
            .data
            .chunks_exact(CHANNELS)
            .zip(out.data.chunks_exact_mut(CHANNELS))
        {
            dst.copy_from_slice(&f([src[0], src[1], src[2], src[3]]));
        }
        out
    }

    /// Paints a `w` x `h` rectangle anchored at `(x, y)`.
    ///
    /// The rectangle is clipped to the buffer; parts past the right or
    /// bottom edge are dropped rather than written.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for row in y..y_end {
            for col in x..x_end {
                self.put_pixel(col, row, color);
            }
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent_black() {
        let buffer = PixelBuffer::new(3, 2);
        assert_eq!(buffer.dimensions(), (3, 2));
        assert_eq!(buffer.data().len(), 24);
        assert!(buffer.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_filled_sets_every_pixel() {
        let buffer = PixelBuffer::filled(2, 2, [1, 2, 3, 4]);
        assert_eq!(buffer.data(), &[1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn test_put_and_read_pixel_row_major() {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.put_pixel(2, 1, [10, 20, 30, 40]);
        assert_eq!(buffer.pixel(2, 1), [10, 20, 30, 40]);
        // (2, 1) is the last pixel of a 3x2 buffer
        assert_eq!(&buffer.data()[20..24], &[10, 20, 30, 40]);
        assert_eq!(buffer.pixel(1, 1), [0, 0, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 4")]
    fn test_mismatched_data_length_panics_in_debug() {
        PixelBuffer::from_raw(vec![0; 10], 2, 2);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 buffer")]
    fn test_out_of_bounds_read_panics_in_debug() {
        let buffer = PixelBuffer::new(2, 2);
        buffer.pixel(2, 0);
    }

    #[test]
    fn test_map_pixels_keeps_dimensions_and_source() {
        let source = PixelBuffer::filled(4, 3, [100, 0, 0, 255]);
        let mapped = source.map_pixels(|[r, g, b, a]| [g, r, b, a]);
        assert_eq!(mapped.dimensions(), (4, 3));
        assert_eq!(mapped.pixel(3, 2), [0, 100, 0, 255]);
        assert_eq!(source.pixel(3, 2), [100, 0, 0, 255]);
    }

    #[test]
    fn test_fill_rect_inside_bounds() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.fill_rect(1, 1, 2, 2, [9, 9, 9, 9]);
        assert_eq!(buffer.pixel(0, 0), [0, 0, 0, 0]);
        assert_eq!(buffer.pixel(1, 1), [9, 9, 9, 9]);
        assert_eq!(buffer.pixel(2, 2), [9, 9, 9, 9]);
        assert_eq!(buffer.pixel(3, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_rect_clips_at_edges() {
        let mut buffer = PixelBuffer::new(4, 4);
        buffer.fill_rect(3, 2, 5, 5, [7, 7, 7, 7]);
        assert_eq!(buffer.pixel(3, 2), [7, 7, 7, 7]);
        assert_eq!(buffer.pixel(3, 3), [7, 7, 7, 7]);
        assert_eq!(buffer.pixel(2, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_rect_near_u32_max_does_not_overflow() {
        let mut buffer = PixelBuffer::new(2, 2);
        buffer.fill_rect(1, 1, u32::MAX, u32::MAX, [5, 5, 5, 5]);
        assert_eq!(buffer.pixel(1, 1), [5, 5, 5, 5]);
        assert_eq!(buffer.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn test_clone_is_independent() {
        let buffer = PixelBuffer::filled(2, 2, [100, 100, 100, 100]);
        let mut cloned = buffer.clone();
        cloned.put_pixel(0, 0, [0, 0, 0, 0]);
        assert_eq!(buffer.pixel(0, 0), [100, 100, 100, 100]);
        assert_eq!(cloned.pixel(0, 0), [0, 0, 0, 0]);
    }
}

//! # Pixel Sources
//!
//! The converter reads pixels through the [`PixelSource`] trait rather than
//! a concrete image type, so anything that can answer "how big are you" and
//! "what color is (x, y)" can be printed: decoded files, procedurally
//! generated frames, framebuffer views.
//!
//! Every [`image`] crate buffer with 8-bit channels ([`image::DynamicImage`],
//! [`image::RgbaImage`], [`image::GrayImage`], ...) implements the trait via
//! a blanket impl, so the common path needs no adapter:
//!
//! ```
//! use image::RgbaImage;
//! use punto::Converter;
//!
//! let photo = RgbaImage::new(576, 100);
//! let raster = Converter::default().to_raster(&photo);
//! assert_eq!(raster.bytes_per_row, 72);
//! ```

use image::{GenericImageView, Pixel};

/// A read-only 2D grid of pixels.
///
/// Channels are 16-bit, matching the widest common source precision; 8-bit
/// sources widen each channel with `c * 257` (so `0xFF` becomes `0xFFFF`).
/// Alpha is carried through but the converter ignores it.
///
/// Implementations must return the same dimensions and pixel values for the
/// lifetime of a conversion call; the converter samples each pixel at most
/// once and never writes.
pub trait PixelSource {
    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// The color at `(x, y)` as `[r, g, b, a]` with 16-bit channels.
    ///
    /// Only called with `x < width` and `y < height`.
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4];
}

impl<I> PixelSource for I
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        let pixel = self.get_pixel(x, y).to_rgba();
        pixel.0.map(|c| u16::from(c) * 257)
    }
}

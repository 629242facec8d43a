//! # Threshold Raster Conversion
//!
//! This module converts continuous-tone images to the binary (black/white)
//! raster format that line-oriented thermal printers consume: one bit per
//! dot, packed MSB-first into bytes, one row of bytes per printer scan line.
//!
//! ## How Conversion Works
//!
//! For every pixel inside the printable width we:
//!
//! 1. Read the pixel color (16-bit RGBA channels, alpha ignored)
//! 2. Compute a perceptual lightness in `[0, 1]`
//! 3. Print a black dot if `threshold >= lightness`
//!
//! Raising the threshold classifies more pixels as black. A threshold of
//! `1.0` prints everything; `0.0` prints only pure black (lightness exactly
//! zero still satisfies `0.0 >= 0.0`).
//!
//! ## Lightness
//!
//! Lightness is a weighted luminance approximation:
//!
//! ```text
//! lightness = (55·R + 182·G + 18·B) / (65535 · 255)
//! ```
//!
//! The weights roughly track human sensitivity (green dominates, blue barely
//! registers) and sum to 255, so the result lands exactly in `[0, 1]` for
//! 16-bit channels. These values are load-bearing: changing them changes
//! which dots print.
//!
//! ## Bit Packing
//!
//! Rows are packed independently and padded to whole bytes:
//!
//! ```text
//! column:  0 1 2 3 4 5 6 7   8 9 ...
//! bit:     7 6 5 4 3 2 1 0   7 6 ...   (within each byte, MSB first)
//! ```
//!
//! A 10-dot-wide all-black row therefore packs as `0xFF, 0xC0` - the six
//! trailing bits of the second byte are padding and stay white.
//!
//! ## Truncation
//!
//! Images wider than [`Converter::max_width`] are truncated, not scaled:
//! columns at or beyond the limit are never sampled and never influence the
//! output. Callers who want scaling must resize before converting.
//!
//! ## Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use punto::Converter;
//!
//! let black = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
//! let converter = Converter::new(576, 0.5);
//! let raster = converter.to_raster(&black);
//!
//! assert_eq!(raster.bytes_per_row, 1);
//! assert_eq!(raster.data, vec![0x80]); // one black dot, MSB
//! ```

use crate::source::PixelSource;
use crate::target::Target;

/// Perceptual luminance weights for red, green and blue.
///
/// They sum to 255, which together with 16-bit channels makes the lightness
/// denominator `65535 * 255`.
const LUM_R: u32 = 55;
const LUM_G: u32 = 182;
const LUM_B: u32 = 18;

/// Converts images to packed monochrome rasters.
///
/// A `Converter` holds the two values that decide the output: the printer's
/// maximum line width in dots, and the lightness cutoff between black and
/// white. It keeps no other state; conversions are pure functions of the
/// input image, so a single `Converter` may be shared freely across threads.
///
/// ## Example
///
/// ```
/// use punto::Converter;
///
/// // 80mm paper at 203 DPI is 576 dots wide
/// let converter = Converter::new(576, 0.5);
/// assert_eq!(converter.max_width, 576);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    /// Maximum line width of the printer, in dots. Wider images are
    /// truncated to this many columns. Zero produces empty rows.
    pub max_width: u32,

    /// Lightness cutoff in `[0, 1]`. Pixels with lightness at or below this
    /// value print black.
    pub threshold: f64,
}

impl Converter {
    /// Create a converter with the given dot width and threshold.
    pub fn new(max_width: u32, threshold: f64) -> Self {
        Self {
            max_width,
            threshold,
        }
    }

    /// Convert an image to a packed raster.
    ///
    /// This is the whole pipeline: sample, compute lightness, threshold,
    /// pack. It cannot fail; degenerate inputs (zero-size images,
    /// `max_width == 0`) yield an empty buffer.
    pub fn to_raster<I>(&self, img: &I) -> Raster
    where
        I: PixelSource + ?Sized,
    {
        let (img_width, height) = img.dimensions();

        // Truncate to the printable width.
        let width = img_width.min(self.max_width);
        let bytes_per_row = (width as usize).div_ceil(8);

        // Zeroed buffer = all white. Black dots are OR'd in below, so bits
        // never unset once set.
        let mut data = vec![0u8; bytes_per_row * height as usize];

        for y in 0..height {
            let row = y as usize * bytes_per_row;
            for x in 0..width {
                if self.threshold >= lightness(img.rgba16(x, y)) {
                    data[row + x as usize / 8] |= 0x80 >> (x % 8);
                }
            }
        }

        Raster {
            width,
            height,
            bytes_per_row,
            data,
        }
    }

    /// Convert an image and deliver the raster to a target.
    ///
    /// Composes [`to_raster`](Self::to_raster) with delivery: exactly one
    /// synchronous [`Target::raster`] call per invocation, with the freshly
    /// computed buffer. If the target blocks (device I/O), this call blocks.
    pub fn print<I, T>(&self, img: &I, target: &mut T)
    where
        I: PixelSource + ?Sized,
        T: Target + ?Sized,
    {
        let raster = self.to_raster(img);
        target.raster(
            raster.width,
            raster.height,
            raster.bytes_per_row,
            &raster.data,
        );
    }
}

impl Default for Converter {
    /// 576 dots (80mm paper at 203 DPI) and a 50% threshold.
    fn default() -> Self {
        Self::new(576, 0.5)
    }
}

/// A packed monochrome raster.
///
/// `data` holds `height` rows of `bytes_per_row` bytes each, row-major with
/// no padding between rows. Within a row, bit 7 of byte 0 is the leftmost
/// dot; 1 = black. `width` is the effective width after truncation - the
/// number of columns that carry real dots (the remaining bits of the last
/// byte in each row are padding and always zero).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub bytes_per_row: usize,
    pub data: Vec<u8>,
}

impl Raster {
    /// Whether the dot at `(x, y)` is black.
    ///
    /// ## Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    pub fn bit(&self, x: u32, y: u32) -> bool {
        assert!(x < self.width && y < self.height, "dot out of bounds");
        let byte = self.data[y as usize * self.bytes_per_row + x as usize / 8];
        byte & (0x80 >> (x % 8)) != 0
    }

    /// Iterate over the packed rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // A zero chunk size would panic; empty rasters have no data to
        // yield anyway.
        self.data.chunks(self.bytes_per_row.max(1))
    }
}

/// Perceptual lightness of a 16-bit RGBA color, in `[0, 1]`.
///
/// Alpha is ignored - there is no transparency compositing. Callers that
/// care about transparency must flatten against a background first.
fn lightness(rgba: [u16; 4]) -> f64 {
    let [r, g, b, _] = rgba;
    let weighted = LUM_R * u32::from(r) + LUM_G * u32::from(g) + LUM_B * u32::from(b);
    f64::from(weighted) / f64::from(0xFFFF * (LUM_R + LUM_G + LUM_B))
}

// ============================================================================
// TESTS
// ============================================================================

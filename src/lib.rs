//! # Punto - Thermal Printer Raster Conversion
//!
//! Punto converts images into the 1-bit-per-dot raster format that
//! ESC/POS-class thermal and dot-matrix printers consume. It provides:
//!
//! - **Threshold conversion**: perceptual lightness against a configurable
//!   cutoff, one bit per dot
//! - **Bit packing**: MSB-first, row-major byte rows padded to whole bytes
//! - **Truncation**: images wider than the printer are cut, never scaled
//! - **Targets**: a trait seam for routing rasters to devices, files, or
//!   test harnesses
//!
//! ## Quick Start
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use punto::{Converter, MemoryTarget};
//!
//! // A 10-dot black bar
//! let img = RgbaImage::from_pixel(10, 1, Rgba([0, 0, 0, 255]));
//!
//! // 576 dots max width, 50% lightness threshold
//! let converter = Converter::new(576, 0.5);
//!
//! // Convert in place...
//! let raster = converter.to_raster(&img);
//! assert_eq!(raster.bytes_per_row, 2);
//! assert_eq!(raster.data, vec![0xFF, 0xC0]);
//!
//! // ...or convert and deliver to a target in one step.
//! let mut target = MemoryTarget::new();
//! converter.print(&img, &mut target);
//! assert_eq!(target.pages().len(), 1);
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`convert`] | The converter and packed raster type |
//! | [`source`] | Pixel input abstraction |
//! | [`target`] | Raster output abstraction and bundled targets |
//! | [`error`] | Error types |
//!
//! ## Scope
//!
//! Punto stops at the packed buffer. Decoding image files, dithering,
//! printer command framing and device I/O belong to its callers - the
//! [`image`] crate on the way in, a [`target::Target`] implementation on
//! the way out.

pub mod convert;
pub mod error;
pub mod source;
pub mod target;

// Re-exports for convenience
pub use convert::{Converter, Raster};
pub use error::PuntoError;
pub use source::PixelSource;
pub use target::{MemoryTarget, Target, WriteTarget};

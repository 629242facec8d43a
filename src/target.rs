//! # Raster Targets
//!
//! A target is whatever consumes the finished raster: a printer driver, a
//! device node, a file, a test harness. The converter talks to all of them
//! through the single-method [`Target`] trait and makes exactly one call per
//! print, so swapping transports never touches conversion code.
//!
//! Two targets ship with the crate:
//!
//! - [`MemoryTarget`]: captures delivered pages in memory. For tests and
//!   previews.
//! - [`WriteTarget`]: streams the raw packed bytes to any [`std::io::Write`]
//!   (an open `/dev/usb/lp0`, a file, a TCP stream).

use std::io::Write;

use crate::error::PuntoError;

/// Receives finished rasters.
///
/// `data` is always exactly `bytes_per_row * height` bytes, row-major,
/// MSB-first within each byte. `width` is the number of leading bits per row
/// that carry real dots; the rest of the last byte is padding.
///
/// The method returns nothing to the converter - delivery failures are a
/// target-level concern (see [`WriteTarget::finish`] for how the bundled
/// writer target surfaces them).
pub trait Target {
    fn raster(&mut self, width: u32, height: u32, bytes_per_row: usize, data: &[u8]);
}

/// One delivered raster page, as captured by [`MemoryTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub width: u32,
    pub height: u32,
    pub bytes_per_row: usize,
    pub data: Vec<u8>,
}

/// A target that keeps every delivered page in memory.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    pages: Vec<Page>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pages delivered so far, oldest first.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

impl Target for MemoryTarget {
    fn raster(&mut self, width: u32, height: u32, bytes_per_row: usize, data: &[u8]) {
        self.pages.push(Page {
            width,
            height,
            bytes_per_row,
            data: data.to_vec(),
        });
    }
}

/// A target that writes the packed bytes straight to an [`std::io::Write`].
///
/// No framing or printer commands are added - the output is the raw raster
/// buffer. Because [`Target::raster`] cannot return an error, the first I/O
/// failure is stashed and subsequent deliveries are skipped; call
/// [`finish`](Self::finish) to flush and learn whether everything made it.
///
/// ## Example
///
/// ```
/// use image::RgbaImage;
/// use punto::{Converter, WriteTarget};
///
/// let img = RgbaImage::new(16, 4);
/// let mut target = WriteTarget::new(Vec::new());
/// Converter::default().print(&img, &mut target);
///
/// let written = target.finish()?;
/// assert_eq!(written.len(), 2 * 4); // 16 dots = 2 bytes per row, 4 rows
/// # Ok::<(), punto::PuntoError>(())
/// ```
#[derive(Debug)]
pub struct WriteTarget<W> {
    writer: W,
    error: Option<PuntoError>,
}

impl<W: Write> WriteTarget<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flush the writer and return it, or the first delivery error.
    pub fn finish(mut self) -> Result<W, PuntoError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Target for WriteTarget<W> {
    fn raster(&mut self, _width: u32, _height: u32, _bytes_per_row: usize, data: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(data) {
            self.error = Some(err.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_memory_target_captures_pages() {
        let mut target = MemoryTarget::new();
        target.raster(8, 1, 1, &[0xAA]);
        target.raster(16, 2, 2, &[0xFF, 0x00, 0xFF, 0x00]);

        let pages = target.pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].data, vec![0xAA]);
        assert_eq!(pages[1].bytes_per_row, 2);
    }

    #[test]
    fn test_write_target_passes_bytes_through() {
        let mut target = WriteTarget::new(Vec::new());
        target.raster(10, 1, 2, &[0xFF, 0xC0]);
        target.raster(10, 1, 2, &[0x00, 0x00]);

        let written = target.finish().unwrap();
        assert_eq!(written, vec![0xFF, 0xC0, 0x00, 0x00]);
    }

    #[derive(Debug)]
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "printer unplugged"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_target_surfaces_first_error() {
        let mut target = WriteTarget::new(BrokenPipe);
        target.raster(8, 1, 1, &[0x80]);
        // Later deliveries are skipped, not retried.
        target.raster(8, 1, 1, &[0x01]);

        let err = target.finish().unwrap_err();
        assert!(matches!(err, PuntoError::Io(_)));
    }

    #[test]
    fn test_target_is_object_safe() {
        let mut boxed: Box<dyn Target> = Box::new(MemoryTarget::new());
        boxed.raster(8, 1, 1, &[0x55]);
    }
}

//! Bitmap encoder.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::header::{
    padded_row_len, row_padding, CoreHeader, FileHeader, InfoHeader, CORE_HEADER_LEN,
    DATA_OFFSET, DEFAULT_PIXELS_PER_METER, SIGNATURE,
};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;

/// Bitmap encoder for framebuffer output.
///
/// Writes an uncompressed, bottom-up bitmap whose rows are padded to four
/// bytes. Only the resolution fields are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpEncoder {
    x_pixels_per_meter: i32,
    y_pixels_per_meter: i32,
}

impl Default for BmpEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BmpEncoder {
    /// Encoder writing the default resolution (3780 pixels per meter).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            x_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
            y_pixels_per_meter: DEFAULT_PIXELS_PER_METER,
        }
    }

    /// Override the resolution fields.
    #[must_use]
    pub const fn with_resolution(mut self, x_pixels_per_meter: i32, y_pixels_per_meter: i32) -> Self {
        self.x_pixels_per_meter = x_pixels_per_meter;
        self.y_pixels_per_meter = y_pixels_per_meter;
        self
    }

    /// Build both headers for a framebuffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataTooLarge`] if the file size does not fit in 32 bits.
    pub fn headers(&self, fb: &Framebuffer) -> Result<(FileHeader, InfoHeader)> {
        let row_len = padded_row_len(fb.pitch()) as u64;
        let total = u64::from(DATA_OFFSET) + row_len * u64::from(fb.height());
        let file_size = u32::try_from(total).map_err(|_| Error::DataTooLarge(total))?;
        let (width, height) = match (i32::try_from(fb.width()), i32::try_from(fb.height())) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(Error::DataTooLarge(total)),
        };

        let file = FileHeader {
            signature: SIGNATURE,
            file_size,
            reserved1: 0,
            reserved2: 0,
            data_offset: DATA_OFFSET,
        };
        let info = InfoHeader {
            core: CoreHeader {
                header_size: CORE_HEADER_LEN as u32,
                width,
                height,
                planes: 1,
                bit_count: fb.bit_depth().bits(),
            },
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: self.x_pixels_per_meter,
            y_pixels_per_meter: self.y_pixels_per_meter,
            colors_used: 0,
            colors_important: 0,
        };
        Ok((file, info))
    }

    /// Encode a framebuffer into any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is too large or writing fails.
    pub fn write_to<W: Write>(&self, fb: &Framebuffer, mut writer: W) -> Result<()> {
        let (file, info) = self.headers(fb)?;
        writer.write_all(&file.to_bytes())?;
        writer.write_all(&info.to_bytes())?;

        let padding = [0u8; 3];
        let pad = row_padding(fb.pitch());
        for row in fb.pixels().chunks_exact(fb.pitch()).rev() {
            writer.write_all(row)?;
            writer.write_all(&padding[..pad])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Encode a framebuffer to bitmap bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is too large to encode.
    pub fn to_bytes(&self, fb: &Framebuffer) -> Result<Vec<u8>> {
        let (file, _) = self.headers(fb)?;
        let mut buffer = Vec::with_capacity(file.file_size as usize);
        self.write_to(fb, &mut buffer)?;
        Ok(buffer)
    }

    /// Write a framebuffer to a bitmap file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, fb: &Framebuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(fb, BufWriter::new(file))?;
        log::debug!(
            "encoded {}x{} {}-bit bitmap to {}",
            fb.width(),
            fb.height(),
            fb.bit_depth().bits(),
            path.display()
        );
        Ok(())
    }
}

//! Bitmap decoder.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

use super::header::{
    padded_row_len, CoreHeader, FileHeader, CORE_HEADER_LEN, FILE_HEADER_LEN, SIGNATURE,
};
use crate::error::{Error, Result};
use crate::framebuffer::{BitDepth, Framebuffer};

/// Bitmap decoder.
///
/// Reads the uncompressed, bottom-up truecolor layout that [`BmpEncoder`]
/// produces. Color tables, compression and top-down (negative height)
/// bitmaps are rejected.
///
/// [`BmpEncoder`]: super::BmpEncoder
pub struct BmpDecoder;

impl BmpDecoder {
    /// Decode a bitmap from a seekable reader.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSignature`] if the file does not start with `BM`
    /// - [`Error::UnsupportedBitDepth`] for bit counts other than 8, 24, 32
    /// - [`Error::InvalidDimensions`] for non-positive width or height
    /// - [`Error::Io`] if the headers or pixel rows are truncated
    pub fn read_from<R: Read + Seek>(mut reader: R) -> Result<Framebuffer> {
        let mut file_bytes = [0u8; FILE_HEADER_LEN];
        reader.read_exact(&mut file_bytes)?;
        let file = FileHeader::from_bytes(&file_bytes);
        if file.signature != SIGNATURE {
            return Err(Error::InvalidSignature {
                found: file.signature,
            });
        }

        let mut core_bytes = [0u8; CORE_HEADER_LEN];
        reader.read_exact(&mut core_bytes)?;
        let core = CoreHeader::from_bytes(&core_bytes);
        if core.header_size != CORE_HEADER_LEN as u32 {
            log::warn!(
                "bitmap header-size field is {}, expected {}; reading core fields only",
                core.header_size,
                CORE_HEADER_LEN
            );
        }

        let depth = BitDepth::from_bits(core.bit_count)?;
        if core.width <= 0 || core.height <= 0 {
            return Err(Error::InvalidDimensions {
                width: i64::from(core.width),
                height: i64::from(core.height),
            });
        }
        let (width, height) = (core.width as u32, core.height as u32);

        // Refuse to allocate for pixel data the stream does not contain.
        let pitch = width as usize * depth.bytes_per_pixel();
        let row_len = padded_row_len(pitch) as u64;
        let stream_len = reader.seek(SeekFrom::End(0))?;
        let needed = u64::from(file.data_offset)
            .saturating_add(row_len.saturating_mul(u64::from(height - 1)))
            .saturating_add(pitch as u64);
        if stream_len < needed {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("bitmap pixel data truncated: need {needed} bytes, have {stream_len}"),
            )));
        }

        let mut fb = Framebuffer::new(width, height, depth)?;
        for file_row in 0..height {
            let offset = u64::from(file.data_offset) + row_len * u64::from(file_row);
            reader.seek(SeekFrom::Start(offset))?;

            let start = (height - 1 - file_row) as usize * pitch;
            reader.read_exact(&mut fb.pixels_mut()[start..start + pitch])?;
        }

        Ok(fb)
    }

    /// Decode a bitmap held in memory.
    ///
    /// # Errors
    ///
    /// See [`read_from`](Self::read_from).
    pub fn from_bytes(data: &[u8]) -> Result<Framebuffer> {
        Self::read_from(Cursor::new(data))
    }

    /// Decode a bitmap file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened, otherwise see
    /// [`read_from`](Self::read_from).
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Framebuffer> {
        let path = path.as_ref();
        let fb = Self::read_from(BufReader::new(File::open(path)?))?;
        log::debug!(
            "decoded {}x{} {}-bit bitmap from {}",
            fb.width(),
            fb.height(),
            fb.bit_depth().bits(),
            path.display()
        );
        Ok(fb)
    }
}

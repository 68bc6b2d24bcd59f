//! Uncompressed bitmap codec.
//!
//! Encodes a [`Framebuffer`] as a bottom-up bitmap with rows padded to four
//! bytes, and decodes that layout back into a fresh framebuffer. The pixel
//! bytes are copied verbatim, so encode followed by decode is the identity.
//!
//! The header-size field holds the size of the core info fields (16) rather
//! than the conventional 40, so the files round-trip through this codec but
//! may be rejected by strict third-party readers.

mod decoder;
mod encoder;
pub mod header;

pub use decoder::BmpDecoder;
pub use encoder::BmpEncoder;

use std::path::Path;

use crate::error::Result;
use crate::framebuffer::Framebuffer;

impl Framebuffer {
    /// Save as a bitmap file with the default encoder settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_bmp<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        BmpEncoder::new().write_to_file(self, path)
    }

    /// Load a bitmap file into a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a supported bitmap.
    pub fn load_bmp<P: AsRef<Path>>(path: P) -> Result<Self> {
        BmpDecoder::read_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::framebuffer::BitDepth;

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.bmp");

        let mut fb = Framebuffer::new(13, 7, BitDepth::Bgr24).unwrap();
        fb.clear(Rgba::rgb(12, 34, 56));
        fb.set_pixel(12, 6, Rgba::WHITE).unwrap();
        fb.save_bmp(&path).unwrap();

        let loaded = Framebuffer::load_bmp(&path).unwrap();
        assert_eq!(loaded, fb);

        let on_disk = std::fs::read(&path).unwrap();
        assert_eq!(on_disk.len(), 54 + 40 * 7);
    }
}

//! Error types for softraster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in softraster operations.
///
/// Degenerate geometry is never an error: drawing a collinear triangle is a
/// successful no-op. Everything here is a real failure.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, truncated bitmap data, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Bitmap signature did not match `BM`.
    #[error("Invalid bitmap signature: expected 0x4D42, found {found:#06X}")]
    InvalidSignature {
        /// Signature read from the file header.
        found: u16,
    },

    /// Bit depth other than 8, 24 or 32.
    #[error("Unsupported bit depth: {0} bits per pixel")]
    UnsupportedBitDepth(u16),

    /// Invalid dimensions for a framebuffer or bitmap header.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: i64,
        /// Height value.
        height: i64,
    },

    /// Pixel coordinate outside the framebuffer.
    #[error("Pixel ({x}, {y}) out of range for {width}x{height} buffer")]
    OutOfBounds {
        /// X coordinate.
        x: i64,
        /// Y coordinate.
        y: i64,
        /// Buffer width.
        width: u32,
        /// Buffer height.
        height: u32,
    },

    /// Block transfer region does not fit inside the source or destination.
    #[error("Region {width}x{height} at ({x}, {y}) does not fit in {bound_width}x{bound_height} buffer")]
    RegionOutOfBounds {
        /// Region origin x.
        x: u32,
        /// Region origin y.
        y: u32,
        /// Region width.
        width: u32,
        /// Region height.
        height: u32,
        /// Width of the buffer the region was checked against.
        bound_width: u32,
        /// Height of the buffer the region was checked against.
        bound_height: u32,
    },

    /// Pixel data too large to allocate, or to describe in the 32-bit file size field.
    #[error("Image too large: {0} bytes")]
    DataTooLarge(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_signature_display_is_hex() {
        let err = Error::InvalidSignature { found: 0x5050 };
        assert!(err.to_string().contains("0x5050"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = Error::OutOfBounds {
            x: -1,
            y: 7,
            width: 10,
            height: 20,
        };
        let msg = err.to_string();
        assert!(msg.contains("(-1, 7)"));
        assert!(msg.contains("10x20"));
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
    }
}

//! Field-by-field packing of the bitmap file and info headers.
//!
//! Every field is little-endian and packed with no host padding, so the
//! byte layout is independent of struct alignment.

/// `BM` read as a little-endian `u16`.
pub const SIGNATURE: u16 = 0x4D42;

/// Packed size of [`FileHeader`].
pub const FILE_HEADER_LEN: usize = 14;

/// Packed size of the core info fields ([`CoreHeader`]).
pub const CORE_HEADER_LEN: usize = 16;

/// Packed size of [`InfoHeader`].
pub const INFO_HEADER_LEN: usize = 40;

/// Offset of the pixel data: both headers back to back.
pub const DATA_OFFSET: u32 = (FILE_HEADER_LEN + INFO_HEADER_LEN) as u32;

/// Resolution written when none is configured (about 96 DPI).
pub const DEFAULT_PIXELS_PER_METER: i32 = 3780;

/// Zero bytes appended to a row of `pitch` bytes to reach a 4-byte boundary.
#[must_use]
pub const fn row_padding(pitch: usize) -> usize {
    (4 - pitch % 4) % 4
}

/// Row length on disk, padding included.
#[must_use]
pub const fn padded_row_len(pitch: usize) -> usize {
    pitch + row_padding(pitch)
}

/// Bitmap file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    /// File signature, [`SIGNATURE`] for valid files.
    pub signature: u16,
    /// Total file size in bytes.
    pub file_size: u32,
    /// Reserved, written as zero.
    pub reserved1: u16,
    /// Reserved, written as zero.
    pub reserved2: u16,
    /// Offset from the start of the file to the pixel data.
    pub data_offset: u32,
}

impl FileHeader {
    /// Pack into bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; FILE_HEADER_LEN] {
        let mut out = [0u8; FILE_HEADER_LEN];
        out[0..2].copy_from_slice(&self.signature.to_le_bytes());
        out[2..6].copy_from_slice(&self.file_size.to_le_bytes());
        out[6..8].copy_from_slice(&self.reserved1.to_le_bytes());
        out[8..10].copy_from_slice(&self.reserved2.to_le_bytes());
        out[10..14].copy_from_slice(&self.data_offset.to_le_bytes());
        out
    }

    /// Unpack from bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; FILE_HEADER_LEN]) -> Self {
        Self {
            signature: le_u16(bytes, 0),
            file_size: le_u32(bytes, 2),
            reserved1: le_u16(bytes, 6),
            reserved2: le_u16(bytes, 8),
            data_offset: le_u32(bytes, 10),
        }
    }
}

/// Core info fields: the part of the info header the decoder reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreHeader {
    /// Header-size field. This codec writes [`CORE_HEADER_LEN`], not the
    /// full info header length, so third-party readers may reject the file.
    pub header_size: u32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels; positive means bottom-up rows.
    pub height: i32,
    /// Color planes, always 1.
    pub planes: u16,
    /// Bits per pixel.
    pub bit_count: u16,
}

impl CoreHeader {
    /// Pack into bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; CORE_HEADER_LEN] {
        let mut out = [0u8; CORE_HEADER_LEN];
        out[0..4].copy_from_slice(&self.header_size.to_le_bytes());
        out[4..8].copy_from_slice(&self.width.to_le_bytes());
        out[8..12].copy_from_slice(&self.height.to_le_bytes());
        out[12..14].copy_from_slice(&self.planes.to_le_bytes());
        out[14..16].copy_from_slice(&self.bit_count.to_le_bytes());
        out
    }

    /// Unpack from bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; CORE_HEADER_LEN]) -> Self {
        Self {
            header_size: le_u32(bytes, 0),
            width: le_i32(bytes, 4),
            height: le_i32(bytes, 8),
            planes: le_u16(bytes, 12),
            bit_count: le_u16(bytes, 14),
        }
    }
}

/// Full info header as written by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    /// Core fields.
    pub core: CoreHeader,
    /// Compression, 0 (none).
    pub compression: u32,
    /// Image size, 0 (allowed for uncompressed data).
    pub image_size: u32,
    /// Horizontal resolution.
    pub x_pixels_per_meter: i32,
    /// Vertical resolution.
    pub y_pixels_per_meter: i32,
    /// Color table entries, 0.
    pub colors_used: u32,
    /// Important colors, 0.
    pub colors_important: u32,
}

impl InfoHeader {
    /// Pack into bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; INFO_HEADER_LEN] {
        let mut out = [0u8; INFO_HEADER_LEN];
        out[0..16].copy_from_slice(&self.core.to_bytes());
        out[16..20].copy_from_slice(&self.compression.to_le_bytes());
        out[20..24].copy_from_slice(&self.image_size.to_le_bytes());
        out[24..28].copy_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out[28..32].copy_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out[32..36].copy_from_slice(&self.colors_used.to_le_bytes());
        out[36..40].copy_from_slice(&self.colors_important.to_le_bytes());
        out
    }

    /// Unpack from bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8; INFO_HEADER_LEN]) -> Self {
        let mut core = [0u8; CORE_HEADER_LEN];
        core.copy_from_slice(&bytes[..CORE_HEADER_LEN]);
        Self {
            core: CoreHeader::from_bytes(&core),
            compression: le_u32(bytes, 16),
            image_size: le_u32(bytes, 20),
            x_pixels_per_meter: le_i32(bytes, 24),
            y_pixels_per_meter: le_i32(bytes, 28),
            colors_used: le_u32(bytes, 32),
            colors_important: le_u32(bytes, 36),
        }
    }
}

#[inline]
fn le_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

#[inline]
fn le_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
fn le_i32(bytes: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

//! Core framebuffer for pixel rendering.
//!
//! Provides a row-major, tightly packed pixel buffer in B,G,R(,X) byte order.
//! Every pixel access goes through one bounds-checked index computation.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{ClipRect, PixelRect};

/// Supported pixel depths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum BitDepth {
    /// One intensity byte per pixel.
    Gray8 = 8,
    /// B, G, R.
    Bgr24 = 24,
    /// B, G, R and one byte that is never written.
    Bgrx32 = 32,
}

impl BitDepth {
    /// Parse a bits-per-pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedBitDepth`] for anything but 8, 24 or 32.
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            8 => Ok(Self::Gray8),
            24 => Ok(Self::Bgr24),
            32 => Ok(Self::Bgrx32),
            other => Err(Error::UnsupportedBitDepth(other)),
        }
    }

    /// Bits per pixel.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self as u16
    }

    /// Bytes per pixel.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> usize {
        (self as usize) / 8
    }
}

/// Single-owner pixel buffer.
///
/// Rows are `pitch = width * bpp / 8` bytes with no padding in memory.
/// Cloning produces an independent deep copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Pixel depth.
    depth: BitDepth,
    /// Pixels in row-major order, `pitch * height` bytes.
    pixels: Vec<u8>,
}

impl Framebuffer {
    /// Create a new zero-filled framebuffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero, and
    /// [`Error::DataTooLarge`] if the pixel array size does not fit in memory.
    ///
    /// # Example
    ///
    /// ```
    /// use softraster::framebuffer::{BitDepth, Framebuffer};
    ///
    /// let fb = Framebuffer::new(100, 100, BitDepth::Bgr24).unwrap();
    /// assert_eq!(fb.pitch(), 300);
    /// assert_eq!(fb.pixels().len(), 30_000);
    /// ```
    pub fn new(width: u32, height: u32, depth: BitDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions {
                width: i64::from(width),
                height: i64::from(height),
            });
        }

        let len = (width as usize)
            .checked_mul(depth.bytes_per_pixel())
            .and_then(|pitch| pitch.checked_mul(height as usize))
            .filter(|&len| isize::try_from(len).is_ok())
            .ok_or_else(|| {
                let bytes = u64::from(width) * u64::from(height);
                Error::DataTooLarge(bytes.saturating_mul(depth.bytes_per_pixel() as u64))
            })?;

        Ok(Self {
            width,
            height,
            depth,
            pixels: vec![0; len],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel depth.
    #[must_use]
    pub const fn bit_depth(&self) -> BitDepth {
        self.depth
    }

    /// Get the number of bytes per pixel.
    #[must_use]
    pub const fn bytes_per_pixel(&self) -> usize {
        self.depth.bytes_per_pixel()
    }

    /// Get the pitch (bytes per row).
    #[must_use]
    pub const fn pitch(&self) -> usize {
        (self.width as usize) * self.depth.bytes_per_pixel()
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get the raw pixel data as a mutable slice.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.pitch();
        Some(&self.pixels[start..start + self.pitch()])
    }

    /// Get a row of pixels as a mutable slice.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let pitch = self.pitch();
        let start = (y as usize) * pitch;
        Some(&mut self.pixels[start..start + pitch])
    }

    /// Default clip rectangle: every addressable pixel, bounds inclusive.
    #[must_use]
    pub const fn clip_rect(&self) -> ClipRect {
        ClipRect::new(0, self.width as i32 - 1, 0, self.height as i32 - 1)
    }

    /// Check whether signed coordinates address a pixel.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Like [`contains`](Self::contains), but reports the failing coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(x, y)` is not addressable.
    pub fn check_bounds(&self, x: i32, y: i32) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(self.out_of_bounds(i64::from(x), i64::from(y)))
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Alpha is always reported as 255.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the buffer.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Rgba> {
        let idx = self.pixel_index(x, y)?;
        let color = match self.depth {
            BitDepth::Gray8 => Rgba::gray(self.pixels[idx]),
            BitDepth::Bgr24 | BitDepth::Bgrx32 => Rgba::from_bgr([
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
            ]),
        };
        Ok(color)
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Alpha is never written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if the coordinates are outside the buffer.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        let idx = self.pixel_index(x, y)?;
        let depth = self.depth;
        write_channels(&mut self.pixels[idx..], depth, color);
        Ok(())
    }

    /// Set a pixel from signed coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for negative or too-large coordinates.
    pub fn put(&mut self, x: i32, y: i32, color: Rgba) -> Result<()> {
        if x < 0 || y < 0 {
            return Err(self.out_of_bounds(i64::from(x), i64::from(y)));
        }
        self.set_pixel(x as u32, y as u32, color)
    }

    /// Fill every pixel with a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let depth = self.depth;
        for pixel in self.pixels.chunks_exact_mut(depth.bytes_per_pixel()) {
            write_channels(pixel, depth, color);
        }
    }

    /// Copy a region of this buffer into `dest` at `(dest_x, dest_y)`.
    ///
    /// Pixels are copied one by one through the color accessors, so the two
    /// buffers may have different depths. No blending is performed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] (before touching `dest`) if the
    /// region does not fit in this buffer or its destination does not fit
    /// in `dest`.
    pub fn blit_to(
        &self,
        dest: &mut Framebuffer,
        region: PixelRect,
        dest_x: u32,
        dest_y: u32,
    ) -> Result<()> {
        if !region.fits_within(self.width, self.height) {
            return Err(region_error(region, self.width, self.height));
        }
        let target = PixelRect::new(dest_x, dest_y, region.width, region.height);
        if !target.fits_within(dest.width, dest.height) {
            return Err(region_error(target, dest.width, dest.height));
        }

        for i in 0..region.height {
            for j in 0..region.width {
                let color = self.get_pixel(region.x + j, region.y + i)?;
                dest.set_pixel(dest_x + j, dest_y + i, color)?;
            }
        }
        Ok(())
    }

    /// Copy the whole of `src` into this buffer with its top-left at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RegionOutOfBounds`] if `src` does not fit.
    pub fn draw_image(&mut self, src: &Framebuffer, x: u32, y: u32) -> Result<()> {
        src.blit_to(self, PixelRect::new(0, 0, src.width, src.height), x, y)
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> Result<usize> {
        if x >= self.width || y >= self.height {
            return Err(self.out_of_bounds(i64::from(x), i64::from(y)));
        }
        Ok((y as usize) * self.pitch() + (x as usize) * self.bytes_per_pixel())
    }

    fn out_of_bounds(&self, x: i64, y: i64) -> Error {
        Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Write one pixel's channels for the given depth.
#[inline]
fn write_channels(pixel: &mut [u8], depth: BitDepth, color: Rgba) {
    match depth {
        BitDepth::Gray8 => pixel[0] = color.intensity(),
        BitDepth::Bgr24 | BitDepth::Bgrx32 => pixel[..3].copy_from_slice(&color.to_bgr()),
    }
}

fn region_error(region: PixelRect, bound_width: u32, bound_height: u32) -> Error {
    Error::RegionOutOfBounds {
        x: region.x,
        y: region.y,
        width: region.width,
        height: region.height,
        bound_width,
        bound_height,
    }
}

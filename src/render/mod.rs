//! Rasterization of lines and triangles.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: integer-only 8-connected line drawing
//! - **Cohen-Sutherland**: outcode-based segment clipping against a rectangle
//! - **Scanline fill**: two-pass triangle fill split at the middle vertex
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Newman, W. M., & Sproull, R. F. (1973). *Principles of Interactive Computer Graphics*.

mod line;
mod triangle;

pub use line::{classify_region, clip_line, draw_line, draw_line_clipped, RegionCode};
pub use triangle::{draw_triangle, fill_triangle, fill_triangle_with_spokes, interpolate_x};

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Triangle};

/// Trait for drawable primitives.
pub trait Drawable {
    /// Draw this primitive to a framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the primitive does not fit in the framebuffer.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) -> Result<()>;

    /// Draw this primitive, clipped to the framebuffer where supported.
    fn draw_clipped(&self, fb: &mut Framebuffer, color: Rgba) -> Result<()> {
        self.draw(fb, color)
    }
}

impl Drawable for Line {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) -> Result<()> {
        draw_line(fb, self.start.x, self.start.y, self.end.x, self.end.y, color)
    }

    fn draw_clipped(&self, fb: &mut Framebuffer, color: Rgba) -> Result<()> {
        draw_line_clipped(fb, self.start.x, self.start.y, self.end.x, self.end.y, color)
    }
}

impl Drawable for Triangle {
    fn draw(&self, fb: &mut Framebuffer, color: Rgba) -> Result<()> {
        draw_triangle(fb, self, color)
    }

    fn draw_clipped(&self, fb: &mut Framebuffer, color: Rgba) -> Result<()> {
        fill_triangle_with_spokes(fb, self, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::BitDepth;

    #[test]
    fn test_drawable_trait_line() {
        let mut fb = Framebuffer::new(100, 100, BitDepth::Bgr24).unwrap();
        fb.clear(Rgba::WHITE);

        let line = Line::from_coords(10, 10, 90, 90);
        line.draw(&mut fb, Rgba::BLACK).unwrap();

        assert_eq!(fb.get_pixel(50, 50).unwrap(), Rgba::BLACK);
    }

    #[test]
    fn test_drawable_line_clipped() {
        let mut fb = Framebuffer::new(100, 100, BitDepth::Bgr24).unwrap();

        let line = Line::from_coords(-10, 50, 200, 50);
        assert!(line.draw(&mut fb, Rgba::RED).is_err());
        line.draw_clipped(&mut fb, Rgba::RED).unwrap();

        assert_eq!(fb.get_pixel(0, 50).unwrap(), Rgba::RED);
        assert_eq!(fb.get_pixel(99, 50).unwrap(), Rgba::RED);
    }

    #[test]
    fn test_drawable_trait_triangle() {
        let mut fb = Framebuffer::new(100, 100, BitDepth::Bgr24).unwrap();

        let tri = Triangle::from_coords(10, 10, 50, 80, 90, 20);
        tri.draw(&mut fb, Rgba::GREEN).unwrap();

        assert_eq!(fb.get_pixel(10, 10).unwrap(), Rgba::GREEN);
        assert_eq!(fb.get_pixel(90, 20).unwrap(), Rgba::GREEN);
        // Wireframe leaves the centroid untouched
        assert_eq!(fb.get_pixel(50, 36).unwrap(), Rgba::BLACK);
    }
}

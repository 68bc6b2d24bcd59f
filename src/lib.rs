//! # Softraster
//!
//! Minimal 2D software rasterizer working on an in-memory pixel buffer.
//!
//! ## Features
//!
//! - **Pure Rust**: No windowing system, no GPU, no native image libraries
//! - **Checked access**: every pixel read and write is bounds-checked
//! - **Lines**: Bresenham rasterization and Cohen-Sutherland clipping
//! - **Triangles**: wireframe and scanline-filled
//! - **Bitmaps**: bit-exact encoder/decoder for uncompressed bottom-up BMP files
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use softraster::prelude::*;
//!
//! let mut fb = Framebuffer::new(100, 100, BitDepth::Bgr24)?;
//! fb.clear(Rgba::BLACK);
//!
//! let tri = Triangle::from_coords(10, 10, 50, 80, 90, 20);
//! fill_triangle(&mut fb, &tri, Rgba::RED)?;
//!
//! fb.save_bmp("triangle.bmp")?;
//! # Ok::<(), softraster::Error>(())
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Newman, W. M., & Sproull, R. F. (1973). *Principles of Interactive Computer Graphics*.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in raster code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and channel-order helpers.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, segments, triangles, rectangles).
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line and triangle rasterization.
pub mod render;

/// Uncompressed bitmap encoder and decoder.
pub mod bmp;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for softraster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use softraster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bmp::{BmpDecoder, BmpEncoder};
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::{BitDepth, Framebuffer};
    pub use crate::geometry::{ClipRect, Line, PixelRect, Point, Triangle};
    pub use crate::render::{
        classify_region, clip_line, draw_line, draw_line_clipped, draw_triangle, fill_triangle,
        fill_triangle_with_spokes, Drawable, RegionCode,
    };
}

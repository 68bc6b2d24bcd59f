//! Triangle rendering: wireframe and scanline fill.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{ClipRect, Point, Triangle};

use super::line::{clip_line, draw_line, draw_line_clipped};

/// Draw a triangle outline with three Bresenham edges (a-b, b-c, c-a).
///
/// Degenerate (collinear) triangles draw nothing and succeed.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) before drawing
/// if any vertex lies outside the framebuffer.
pub fn draw_triangle(fb: &mut Framebuffer, tri: &Triangle, color: Rgba) -> Result<()> {
    if tri.is_degenerate() {
        log::trace!("skipping degenerate triangle {tri:?}");
        return Ok(());
    }
    check_vertices(fb, tri)?;

    let [a, b, c] = tri.vertices();
    draw_line(fb, a.x, a.y, b.x, b.y, color)?;
    draw_line(fb, b.x, b.y, c.x, c.y, color)?;
    draw_line(fb, c.x, c.y, a.x, a.y, color)
}

/// Fill a triangle with horizontal spans.
///
/// Vertices are sorted by y; rows from the top vertex to the middle one are
/// bounded by the long edge and the upper short edge, rows from the middle
/// vertex to the bottom one by the long edge and the lower short edge.
/// Span ends use truncating integer interpolation, so shallow edges look
/// slightly jagged.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) before drawing
/// if any vertex lies outside the framebuffer.
pub fn fill_triangle(fb: &mut Framebuffer, tri: &Triangle, color: Rgba) -> Result<()> {
    if tri.is_degenerate() {
        log::trace!("skipping degenerate triangle {tri:?}");
        return Ok(());
    }
    check_vertices(fb, tri)?;

    let [p1, p2, p3] = tri.sorted_by_y();
    let clip = fb.clip_rect();
    scanline_fill(p1, p2, p3, &clip, |y, x_start, x_end| {
        draw_line(fb, x_start, y, x_end, y, color)
    })
}

/// Filled triangle with centroid spokes, tolerant of off-screen vertices.
///
/// Draws the three segments from each vertex to the centroid, each clipped to
/// the framebuffer, then fills the two halves of the triangle split at the
/// middle vertex's row with clipped spans. The outer edges are not stroked
/// separately; they only appear where the fill reaches them.
pub fn fill_triangle_with_spokes(fb: &mut Framebuffer, tri: &Triangle, color: Rgba) -> Result<()> {
    if tri.is_degenerate() {
        log::trace!("skipping degenerate triangle {tri:?}");
        return Ok(());
    }

    let centroid = tri.centroid();
    let clip = fb.clip_rect();
    for vertex in tri.vertices() {
        let (mut from, mut to) = (vertex, centroid);
        if clip_line(&mut from, &mut to, &clip) {
            draw_line(fb, from.x, from.y, to.x, to.y, color)?;
        }
    }

    let [p1, p2, p3] = tri.sorted_by_y();
    let split = Point::new(interpolate_x(p1, p3, p2.y), p2.y);

    let mut span = |y: i32, x_start: i32, x_end: i32| {
        draw_line_clipped(fb, x_start, y, x_end, y, color)
    };
    scanline_fill(p1, p2, split, &clip, &mut span)?;
    scanline_fill(p2, split, p3, &clip, &mut span)
}

/// X coordinate of edge `a`-`b` at row `y`: `a.x + (b.x - a.x) * (y - a.y) / (b.y - a.y)`.
///
/// Integer division truncates toward zero. A horizontal edge yields `a.x`.
#[must_use]
pub fn interpolate_x(a: Point, b: Point, y: i32) -> i32 {
    if a.y == b.y {
        return a.x;
    }
    let (xa, ya) = (i64::from(a.x), i64::from(a.y));
    let (xb, yb) = (i64::from(b.x), i64::from(b.y));
    (xa + (xb - xa) * (i64::from(y) - ya) / (yb - ya)) as i32
}

/// Two-pass scanline walk over vertices already sorted by ascending y.
///
/// `span(y, x_start, x_end)` receives each row with `x_start <= x_end`.
/// Only rows inside `[clip.y_min, clip.y_max]` are visited.
fn scanline_fill<F>(p1: Point, p2: Point, p3: Point, clip: &ClipRect, mut span: F) -> Result<()>
where
    F: FnMut(i32, i32, i32) -> Result<()>,
{
    for y in p1.y.max(clip.y_min)..=p2.y.min(clip.y_max) {
        let a = interpolate_x(p1, p3, y);
        let b = interpolate_x(p1, p2, y);
        span(y, a.min(b), a.max(b))?;
    }
    for y in p2.y.max(clip.y_min)..=p3.y.min(clip.y_max) {
        let a = interpolate_x(p1, p3, y);
        let b = interpolate_x(p2, p3, y);
        span(y, a.min(b), a.max(b))?;
    }
    Ok(())
}

fn check_vertices(fb: &Framebuffer, tri: &Triangle) -> Result<()> {
    for v in tri.vertices() {
        fb.check_bounds(v.x, v.y)?;
    }
    Ok(())
}

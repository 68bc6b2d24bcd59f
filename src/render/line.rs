//! Bresenham line drawing and Cohen-Sutherland clipping.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{ClipRect, Point};

/// Draw a line using Bresenham's algorithm (non-antialiased).
///
/// Both endpoints are plotted. Endpoints are stepped in a canonical order
/// (smaller `(y, x)` first), so `a → b` and `b → a` cover the same pixels.
///
/// # Arguments
///
/// * `fb` - Target framebuffer
/// * `x1`, `y1` - Start coordinates
/// * `x2`, `y2` - End coordinates
/// * `color` - Line color
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`](crate::Error::OutOfBounds) without drawing
/// anything if either endpoint lies outside the framebuffer. Every pixel of
/// the line lies in the endpoints' bounding box, so no other check is needed.
pub fn draw_line(
    fb: &mut Framebuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgba,
) -> Result<()> {
    fb.check_bounds(x1, y1)?;
    fb.check_bounds(x2, y2)?;

    let (mut x, mut y, x_end, y_end) = if (y2, x2) < (y1, x1) {
        (x2, y2, x1, y1)
    } else {
        (x1, y1, x2, y2)
    };

    let dx = (x_end - x).abs();
    let dy = (y_end - y).abs();
    let sx = if x < x_end { 1 } else { -1 };
    let sy = if y < y_end { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        fb.put(x, y, color)?;

        if x == x_end && y == y_end {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    Ok(())
}

/// Clip a segment to the framebuffer, then draw what remains.
///
/// A segment entirely outside the framebuffer draws nothing and succeeds.
pub fn draw_line_clipped(
    fb: &mut Framebuffer,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    color: Rgba,
) -> Result<()> {
    let mut start = Point::new(x1, y1);
    let mut end = Point::new(x2, y2);

    if !clip_line(&mut start, &mut end, &fb.clip_rect()) {
        log::trace!("segment ({x1}, {y1})-({x2}, {y2}) rejected by clipping");
        return Ok(());
    }

    draw_line(fb, start.x, start.y, end.x, end.y, color)
}

// ============================================================================
// Region codes
// ============================================================================

/// Cohen-Sutherland outcode: where a point lies relative to a clip rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RegionCode(u8);

impl RegionCode {
    /// Inside the rectangle.
    pub const INSIDE: Self = Self(0);
    /// Left of `x_min`.
    pub const LEFT: Self = Self(1);
    /// Right of `x_max`.
    pub const RIGHT: Self = Self(2);
    /// Below `y_min`.
    pub const BOTTOM: Self = Self(4);
    /// Above `y_max`.
    pub const TOP: Self = Self(8);

    /// Raw flag bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True when no flag is set.
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// True when every flag of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for RegionCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for RegionCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for RegionCode {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// Classify a point against a clip rectangle.
///
/// LEFT and RIGHT are mutually exclusive, as are BOTTOM and TOP.
#[must_use]
pub fn classify_region(x: i32, y: i32, rect: &ClipRect) -> RegionCode {
    let mut code = RegionCode::INSIDE;

    if x < rect.x_min {
        code |= RegionCode::LEFT;
    } else if x > rect.x_max {
        code |= RegionCode::RIGHT;
    }

    if y < rect.y_min {
        code |= RegionCode::BOTTOM;
    } else if y > rect.y_max {
        code |= RegionCode::TOP;
    }

    code
}

// ============================================================================
// Clipping
// ============================================================================

/// Clip a segment to `rect` in place (Cohen-Sutherland).
///
/// Returns `true` if any part of the segment is inside, with the endpoints
/// moved onto the rectangle as needed. Returns `false` if the segment lies
/// entirely outside; the endpoints are then meaningless.
pub fn clip_line(start: &mut Point, end: &mut Point, rect: &ClipRect) -> bool {
    let mut code1 = classify_region(start.x, start.y, rect);
    let mut code2 = classify_region(end.x, end.y, rect);

    loop {
        if (code1 | code2).is_inside() {
            return true;
        }
        if !(code1 & code2).is_inside() {
            return false;
        }

        let first_outside = !code1.is_inside();
        let code_out = if first_outside { code1 } else { code2 };

        let Some(point) = edge_intersection(code_out, *start, *end, rect) else {
            return false;
        };

        if first_outside {
            *start = point;
            code1 = classify_region(start.x, start.y, rect);
        } else {
            *end = point;
            code2 = classify_region(end.x, end.y, rect);
        }
    }
}

/// Intersect the segment with the first edge flagged in `code`
/// (TOP, then BOTTOM, then RIGHT, then LEFT).
///
/// `None` when the segment runs parallel to that edge. After the trivial
/// reject test this cannot happen: the other endpoint lies on the inner side
/// of the edge, so the two coordinates differ.
fn edge_intersection(code: RegionCode, p1: Point, p2: Point, rect: &ClipRect) -> Option<Point> {
    let (x1, y1) = (i128::from(p1.x), i128::from(p1.y));
    let (x2, y2) = (i128::from(p2.x), i128::from(p2.y));

    let (x, y) = if code.contains(RegionCode::TOP) {
        let y = i128::from(rect.y_max);
        (intercept(x1, x2, y1, y2, y)?, y)
    } else if code.contains(RegionCode::BOTTOM) {
        let y = i128::from(rect.y_min);
        (intercept(x1, x2, y1, y2, y)?, y)
    } else if code.contains(RegionCode::RIGHT) {
        let x = i128::from(rect.x_max);
        (x, intercept(y1, y2, x1, x2, x)?)
    } else if code.contains(RegionCode::LEFT) {
        let x = i128::from(rect.x_min);
        (x, intercept(y1, y2, x1, x2, x)?)
    } else {
        return None;
    };

    // The intersection lies between the endpoints, so it fits in i32.
    Some(Point::new(x as i32, y as i32))
}

/// `a1 + (a2 - a1) * (b - b1) / (b2 - b1)`, truncating.
///
/// Coordinate differences span up to 33 bits, so the product needs 128-bit
/// arithmetic.
fn intercept(a1: i128, a2: i128, b1: i128, b2: i128, b: i128) -> Option<i128> {
    Some(a1 + ((a2 - a1) * (b - b1)).checked_div(b2 - b1)?)
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::framebuffer::BitDepth;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    const SIZE: i32 = 64;

    fn pixel_set(x1: i32, y1: i32, x2: i32, y2: i32) -> BTreeSet<(u32, u32)> {
        let mut fb = Framebuffer::new(SIZE as u32, SIZE as u32, BitDepth::Gray8).unwrap();
        draw_line(&mut fb, x1, y1, x2, y2, Rgba::WHITE).unwrap();

        let mut set = BTreeSet::new();
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                if fb.get_pixel(x, y).unwrap() == Rgba::WHITE {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Pixel count is max(dx, dy) + 1 and both endpoints are included.
        #[test]
        fn prop_line_length_and_endpoints(
            x1 in 0..SIZE, y1 in 0..SIZE, x2 in 0..SIZE, y2 in 0..SIZE
        ) {
            let set = pixel_set(x1, y1, x2, y2);
            let expected = (x2 - x1).abs().max((y2 - y1).abs()) as usize + 1;

            prop_assert_eq!(set.len(), expected);
            prop_assert!(set.contains(&(x1 as u32, y1 as u32)));
            prop_assert!(set.contains(&(x2 as u32, y2 as u32)));
        }

        /// Drawing a→b and b→a touches the same pixels.
        #[test]
        fn prop_line_symmetric(
            x1 in 0..SIZE, y1 in 0..SIZE, x2 in 0..SIZE, y2 in 0..SIZE
        ) {
            prop_assert_eq!(pixel_set(x1, y1, x2, y2), pixel_set(x2, y2, x1, y1));
        }

        /// Every pixel except the start has an 8-neighbour in the set.
        #[test]
        fn prop_line_is_eight_connected(
            x1 in 0..SIZE, y1 in 0..SIZE, x2 in 0..SIZE, y2 in 0..SIZE
        ) {
            let set = pixel_set(x1, y1, x2, y2);
            for &(x, y) in &set {
                if set.len() == 1 {
                    break;
                }
                let has_neighbour = set.iter().any(|&(nx, ny)| {
                    (nx, ny) != (x, y)
                        && (i64::from(nx) - i64::from(x)).abs() <= 1
                        && (i64::from(ny) - i64::from(y)).abs() <= 1
                });
                prop_assert!(has_neighbour, "isolated pixel ({}, {})", x, y);
            }
        }

        /// INSIDE exactly when the point lies in the inclusive rectangle.
        #[test]
        fn prop_classify_inside_iff_contained(
            x in -200i32..200, y in -200i32..200,
            x_min in -100i32..0, w in 0i32..100,
            y_min in -100i32..0, h in 0i32..100,
        ) {
            let rect = ClipRect::new(x_min, x_min + w, y_min, y_min + h);
            prop_assert_eq!(
                classify_region(x, y, &rect).is_inside(),
                rect.contains(Point::new(x, y))
            );
        }

        /// Accepted segments end inside the rectangle; inside segments are untouched.
        #[test]
        fn prop_clip_result_inside(
            x1 in -300i32..300, y1 in -300i32..300,
            x2 in -300i32..300, y2 in -300i32..300,
        ) {
            let rect = ClipRect::new(0, 99, 0, 99);
            let (orig_a, orig_b) = (Point::new(x1, y1), Point::new(x2, y2));
            let (mut a, mut b) = (orig_a, orig_b);

            if clip_line(&mut a, &mut b, &rect) {
                prop_assert!(rect.contains(a));
                prop_assert!(rect.contains(b));
            }
            if rect.contains(orig_a) && rect.contains(orig_b) {
                prop_assert_eq!((a, b), (orig_a, orig_b));
            }
        }

        /// Segments sharing an outside half-plane are always rejected.
        #[test]
        fn prop_clip_rejects_common_outcode(
            x1 in 100i32..400, y1 in -300i32..300,
            x2 in 100i32..400, y2 in -300i32..300,
        ) {
            let rect = ClipRect::new(0, 99, 0, 99);
            let (mut a, mut b) = (Point::new(x1, y1), Point::new(x2, y2));
            prop_assert!(!clip_line(&mut a, &mut b, &rect));
        }
    }
}

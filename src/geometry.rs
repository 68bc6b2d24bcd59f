//! Geometric primitives in integer pixel space.
//!
//! Provides the point, segment, triangle and rectangle types used by the
//! rasterizers.

/// A 2D point with integer pixel coordinates.
///
/// Coordinates are signed so that geometry may extend past the buffer; the
/// rasterizers decide whether that is clipped or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }
}

/// A triangle given by three vertices in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Triangle {
    /// First vertex.
    pub a: Point,
    /// Second vertex.
    pub b: Point,
    /// Third vertex.
    pub c: Point,
}

impl Triangle {
    /// Create a new triangle.
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// Create a triangle from coordinates.
    #[must_use]
    pub const fn from_coords(x1: i32, y1: i32, x2: i32, y2: i32, x3: i32, y3: i32) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3))
    }

    /// The three vertices in drawing order.
    #[must_use]
    pub const fn vertices(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    /// Twice the signed area: `x1*(y2-y3) + x2*(y3-y1) + x3*(y1-y2)`.
    ///
    /// Computed in `i64` so that any pair of `i32` vertices is exact.
    #[must_use]
    pub fn doubled_signed_area(&self) -> i64 {
        let (x1, y1) = (i64::from(self.a.x), i64::from(self.a.y));
        let (x2, y2) = (i64::from(self.b.x), i64::from(self.b.y));
        let (x3, y3) = (i64::from(self.c.x), i64::from(self.c.y));
        x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2)
    }

    /// True when the vertices are collinear (zero area).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.doubled_signed_area() == 0
    }

    /// Vertex average, truncated toward zero.
    #[must_use]
    pub fn centroid(&self) -> Point {
        let sum_x = i64::from(self.a.x) + i64::from(self.b.x) + i64::from(self.c.x);
        let sum_y = i64::from(self.a.y) + i64::from(self.b.y) + i64::from(self.c.y);
        Point::new((sum_x / 3) as i32, (sum_y / 3) as i32)
    }

    /// Vertices ordered by ascending y using three conditional swaps.
    ///
    /// Vertices with equal y keep their relative drawing order.
    #[must_use]
    pub fn sorted_by_y(&self) -> [Point; 3] {
        let [mut p1, mut p2, mut p3] = self.vertices();
        if p1.y > p2.y {
            std::mem::swap(&mut p1, &mut p2);
        }
        if p1.y > p3.y {
            std::mem::swap(&mut p1, &mut p3);
        }
        if p2.y > p3.y {
            std::mem::swap(&mut p2, &mut p3);
        }
        [p1, p2, p3]
    }
}

/// Inclusive clip rectangle `[x_min, x_max] × [y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipRect {
    /// Smallest accepted x.
    pub x_min: i32,
    /// Largest accepted x.
    pub x_max: i32,
    /// Smallest accepted y.
    pub y_min: i32,
    /// Largest accepted y.
    pub y_max: i32,
}

impl ClipRect {
    /// Create a clip rectangle from inclusive bounds.
    #[must_use]
    pub const fn new(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Check if a point lies inside (bounds inclusive).
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x_min
            && point.x <= self.x_max
            && point.y >= self.y_min
            && point.y <= self.y_max
    }
}

/// Axis-aligned pixel region used by block transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    /// X coordinate of the top-left corner.
    pub x: u32,
    /// Y coordinate of the top-left corner.
    pub y: u32,
    /// Width of the region.
    pub width: u32,
    /// Height of the region.
    pub height: u32,
}

impl PixelRect {
    /// Create a new region.
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if the region lies entirely inside a `width × height` area.
    #[must_use]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_area_sign_follows_winding() {
        let ccw = Triangle::from_coords(0, 0, 10, 0, 0, 10);
        let cw = Triangle::from_coords(0, 0, 0, 10, 10, 0);
        assert_eq!(ccw.doubled_signed_area(), 100);
        assert_eq!(cw.doubled_signed_area(), -100);
    }

    #[test]
    fn test_collinear_is_degenerate() {
        assert!(Triangle::from_coords(0, 0, 5, 5, 10, 10).is_degenerate());
        assert!(Triangle::from_coords(3, 3, 3, 3, 3, 3).is_degenerate());
        assert!(!Triangle::from_coords(10, 10, 50, 80, 90, 20).is_degenerate());
    }

    #[test]
    fn test_centroid_truncates() {
        let tri = Triangle::from_coords(10, 10, 50, 80, 90, 20);
        assert_eq!(tri.centroid(), Point::new(50, 36));
    }

    #[test]
    fn test_sorted_by_y() {
        let tri = Triangle::from_coords(50, 80, 90, 20, 10, 10);
        assert_eq!(
            tri.sorted_by_y(),
            [Point::new(10, 10), Point::new(90, 20), Point::new(50, 80)]
        );
    }

    #[test]
    fn test_sorted_by_y_keeps_ties_in_order() {
        let tri = Triangle::from_coords(0, 0, 0, 10, 10, 0);
        assert_eq!(
            tri.sorted_by_y(),
            [Point::new(0, 0), Point::new(10, 0), Point::new(0, 10)]
        );
    }

    #[test]
    fn test_clip_rect_contains_is_inclusive() {
        let rect = ClipRect::new(0, 9, 0, 9);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(9, 9)));
        assert!(!rect.contains(Point::new(10, 5)));
        assert!(!rect.contains(Point::new(5, -1)));
    }

    #[test]
    fn test_pixel_rect_fits_within() {
        assert!(PixelRect::new(0, 0, 10, 10).fits_within(10, 10));
        assert!(PixelRect::new(5, 5, 5, 5).fits_within(10, 10));
        assert!(!PixelRect::new(6, 5, 5, 5).fits_within(10, 10));
        assert!(!PixelRect::new(u32::MAX, 0, 2, 1).fits_within(10, 10));
    }

    #[test]
    fn test_point_from_tuple() {
        assert_eq!(Point::from((3, -4)), Point::new(3, -4));
    }
}

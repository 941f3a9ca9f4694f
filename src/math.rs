//! Scalar helpers and 2D overlap tests.
//!
//! None of these validate their inputs; callers are trusted to pass sane
//! ranges. The two overlap tests deliberately differ at the boundary:
//! touching circles overlap, edge-adjacent rectangles do not.

#[cfg(test)]
#[path = "math_test.rs"]
mod math_test;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A circular region: center plus radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[must_use]
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { center: Point::new(x, y), radius }
    }
}

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Restrict `v` to `[mn, mx]`.
///
/// Unlike [`f64::clamp`] this never panics: with `mn > mx` it returns `mn`.
#[must_use]
pub fn clamp(v: f64, mn: f64, mx: f64) -> f64 {
    mn.max(v.min(mx))
}

/// Whether `mn <= v <= mx`, inclusive at both ends.
#[must_use]
pub fn range_check(v: f64, mn: f64, mx: f64) -> bool {
    v >= mn && v <= mx
}

/// Linear interpolation from `a` to `b`. Ratios outside `[0, 1]` extrapolate.
///
/// ```
/// assert_eq!(gamebox::math::lerp(0.0, 20.0, 0.5), 10.0);
/// ```
#[must_use]
pub fn lerp(a: f64, b: f64, ratio: f64) -> f64 {
    a + ratio * (b - a)
}

/// Whether two circles overlap. Touching counts.
#[must_use]
pub fn circle_overlap(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}

/// Whether two rectangles intersect. Sharing only an edge does not count.
#[must_use]
pub fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    !(a.right() <= b.x || b.right() <= a.x || a.bottom() <= b.y || b.bottom() <= a.y)
}

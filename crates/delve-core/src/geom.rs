//! Geometry primitives: [`Point`] and [`Range`].
//!
//! Both are layered: `z` selects a floor, `x` and `y` address a cell on
//! that floor. X grows right, Y grows down.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 3D integer grid point. `z` is the floor index.
///
/// [`shift`](Self::shift) and [`neighbors_8`](Self::neighbors_8) wrap around
/// at the `i32` edges instead of overflowing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create a point on floor 0.
    #[inline]
    pub const fn flat(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    /// Return a point shifted by (dx, dy) on the same floor, wrapping at
    /// the `i32` edges.
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
            z: self.z,
        }
    }

    /// Same (x, y) on floor `z`.
    #[inline]
    pub const fn with_z(self, z: i32) -> Self {
        Self { x: self.x, y: self.y, z }
    }

    /// All eight neighbours on the same floor, starting north and going
    /// clockwise.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            self.shift(0, -1),
            self.shift(1, -1),
            self.shift(1, 0),
            self.shift(1, 1),
            self.shift(0, 1),
            self.shift(-1, 1),
            self.shift(-1, 0),
            self.shift(-1, -1),
        ]
    }
}

// --- trait impls for Point ---

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
        self.z.hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z
            .cmp(&other.z)
            .then(self.y.cmp(&other.y))
            .then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open layered box \[min, max). `min` is inclusive, `max` is
/// exclusive, on every axis.
///
/// All empty ranges are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Range {}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            // All empty ranges hash the same.
            Point::ZERO.hash(state);
            Point::ZERO.hash(state);
        } else {
            self.min.hash(state);
            self.max.hash(state);
        }
    }
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            min: Point::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// A single-floor range covering `[0, width) x [0, height)` on floor 0.
    #[inline]
    pub fn floor(width: i32, height: i32) -> Self {
        Self::new(Point::ZERO, Point::new(width, height, 1))
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of floors.
    #[inline]
    pub fn layers(self) -> i32 {
        self.max.z - self.min.z
    }

    /// The single-floor slab at absolute floor `z`, or the empty range if
    /// `z` is outside.
    #[inline]
    pub fn layer(self, z: i32) -> Self {
        if z < self.min.z || z >= self.max.z || self.is_empty() {
            return Self::default();
        }
        Self {
            min: self.min.with_z(z),
            max: self.max.with_z(z + 1),
        }
    }

    /// Total number of cells in the range, all floors included.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize) * (self.layers() as usize)
    }

    /// Whether the range has zero or negative volume.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y || self.min.z >= self.max.z
    }

    /// Whether `p` is inside the half-open range.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    /// Iterator over every point in the range: floor by floor, row-major.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// RangeIter
// ---------------------------------------------------------------------------

/// Iterator over the points in a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Point,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.range.is_empty() || self.cur.z >= self.range.max.z {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
            if self.cur.y >= self.range.max.y {
                self.cur.y = self.range.min.y;
                self.cur.z += 1;
            }
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_8_stay_on_floor() {
        let p = Point::new(4, 7, 2);
        let ns = p.neighbors_8();
        let unique: HashSet<Point> = ns.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        for n in ns {
            assert_eq!(n.z, 2);
            assert_ne!(n, p);
            assert!((n.x - p.x).abs() <= 1 && (n.y - p.y).abs() <= 1);
        }
    }

    #[test]
    fn neighbors_8_order_is_fixed() {
        let ns = Point::ZERO.neighbors_8();
        assert_eq!(ns[0], Point::new(0, -1, 0));
        assert_eq!(ns[1], Point::new(1, -1, 0));
        assert_eq!(ns[7], Point::new(-1, -1, 0));
        assert_eq!(ns, Point::ZERO.neighbors_8());
    }

    #[test]
    fn neighbors_8_wrap_at_i32_edges() {
        let corner = Point::new(i32::MAX, i32::MIN, 3);
        let ns = corner.neighbors_8();
        assert_eq!(ns[0], Point::new(i32::MAX, i32::MAX, 3));
        assert_eq!(ns[2], Point::new(i32::MIN, i32::MIN, 3));
        assert_eq!(ns[6], Point::new(i32::MAX - 1, i32::MIN, 3));
        assert_eq!(corner.shift(1, -1), Point::new(i32::MIN, i32::MAX, 3));
    }

    #[test]
    fn points_on_different_floors_differ() {
        let a = Point::new(1, 1, 0);
        let b = Point::new(1, 1, 1);
        assert_ne!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.contains(&b));
        assert!(set.contains(&Point::flat(1, 1)));
    }

    #[test]
    fn point_ordering_is_floor_first() {
        assert!(Point::new(9, 9, 0) < Point::new(0, 0, 1));
        assert!(Point::new(9, 0, 0) < Point::new(0, 1, 0));
        assert!(Point::new(0, 0, 0) < Point::new(1, 0, 0));
    }

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2, 0);
        let b = Point::new(3, -1, 1);
        assert_eq!(a + b, Point::new(4, 1, 1));
        assert_eq!(b - a, Point::new(2, -3, 1));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3, 0));
        assert_eq!(a.with_z(4), Point::new(1, 2, 4));
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(3, -1, 2).to_string(), "(3, -1, 2)");
    }

    #[test]
    fn range_new_canonicalizes() {
        let r = Range::new(Point::new(5, 0, 2), Point::new(0, 5, 0));
        assert_eq!(r.min, Point::new(0, 0, 0));
        assert_eq!(r.max, Point::new(5, 5, 2));
        assert_eq!(r.len(), 50);
    }

    #[test]
    fn range_contains_is_half_open() {
        let r = Range::new(Point::ZERO, Point::new(3, 3, 2));
        assert!(r.contains(Point::new(0, 0, 0)));
        assert!(r.contains(Point::new(2, 2, 1)));
        assert!(!r.contains(Point::new(3, 0, 0)));
        assert!(!r.contains(Point::new(0, 0, 2)));
        assert!(!r.contains(Point::new(0, -1, 0)));
    }

    #[test]
    fn range_layer() {
        let r = Range::new(Point::new(0, 0, 1), Point::new(4, 4, 3));
        assert_eq!(r.layers(), 2);
        let l = r.layer(2);
        assert_eq!(l.min, Point::new(0, 0, 2));
        assert_eq!(l.max, Point::new(4, 4, 3));
        assert_eq!(l.len(), 16);
        assert!(r.layer(0).is_empty());
        assert!(r.layer(3).is_empty());
    }

    #[test]
    fn empty_ranges_compare_equal() {
        let a = Range::default();
        let b = Range::floor(4, 0);
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_ne!(a, Range::floor(1, 1));
    }

    #[test]
    fn range_iter_covers_every_cell_once() {
        let r = Range::new(Point::new(1, 1, 0), Point::new(3, 4, 2));
        let pts: Vec<Point> = r.iter().collect();
        assert_eq!(pts.len(), r.len());
        assert_eq!(pts[0], Point::new(1, 1, 0));
        assert_eq!(pts[1], Point::new(2, 1, 0));
        assert_eq!(pts[2], Point::new(1, 2, 0));
        assert_eq!(*pts.last().unwrap(), Point::new(2, 3, 1));
        assert!(pts.iter().all(|&p| r.contains(p)));
        assert_eq!(Range::default().iter().count(), 0);
    }
}

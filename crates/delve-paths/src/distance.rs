use delve_core::Point;

/// Chebyshev (L∞) distance between two points on the same floor.
///
/// The `z` coordinate is ignored. Distances beyond `i32::MAX` saturate.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    let d = a.x.abs_diff(b.x).max(a.y.abs_diff(b.y));
    i32::try_from(d).unwrap_or(i32::MAX)
}

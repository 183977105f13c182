use delve_core::Point;

/// Passability capability of whatever is being moved.
///
/// Different creatures can have different movement rules; the pathfinder
/// only ever asks whether a single cell may be entered.
pub trait Mover {
    /// Whether the mover may step onto `p`.
    fn can_enter(&self, p: Point) -> bool;
}

impl<F: Fn(Point) -> bool> Mover for F {
    #[inline]
    fn can_enter(&self, p: Point) -> bool {
        self(p)
    }
}

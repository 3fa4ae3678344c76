use core::fmt;

/// Stable identity of a control point or anchor.
/// Identity is independent of the position in the list, which changes when points are removed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub u64);

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for PointId {
    fn from(id: u64) -> Self {
        PointId(id)
    }
}

/// A user placed control point of a single nth-order curve.
/// `order` is the dense 0-based rank of the point in its control polygon.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlPoint<P> {
    pub id: PointId,
    pub order: usize,
    pub position: P,
}

impl<P> ControlPoint<P> {
    pub fn new(id: PointId, order: usize, position: P) -> Self {
        ControlPoint {
            id,
            order,
            position,
        }
    }
}

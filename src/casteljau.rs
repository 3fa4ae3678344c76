//! The De Casteljau reduction step shared by every sampler in this crate.

use tinyvec::TinyVec;

use crate::point::Point;

/// Number of control points the reduction buffer holds on the stack before spilling to the heap.
/// Interactive control polygons stay well below this.
pub const INLINE_POINTS: usize = 16;

/// Evaluate the Bezier curve defined by `points` at `t` with De Casteljau's algorithm.
///
/// Each pass replaces the working buffer by the linear interpolations of its adjacent
/// pairs at `t`, shrinking it by one, until a single point is left. `t` is not clamped.
/// A single control point is returned unchanged, an empty slice yields `None`.
pub fn reduce<P: Point>(points: &[P], t: P::Scalar) -> Option<P> {
    let first = *points.first()?;
    if points.len() == 1 {
        return Some(first);
    }

    let mut p: TinyVec<[P; INLINE_POINTS]> = points.iter().copied().collect();
    // degree = points.len() - 1 passes, each one shorter than the one before
    for level in (1..p.len()).rev() {
        for j in 0..level {
            p[j] = p[j].lerp(p[j + 1], t);
        }
    }
    Some(p[0])
}

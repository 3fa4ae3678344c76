//! Chains of cubic Bezier segments joined at anchors.
//!
//! Every anchor carries an on-curve `middle` point and two tangent handles, `left` for the
//! segment arriving at the anchor and `right` for the segment leaving it. Two consecutive
//! anchors `a`, `b` span the cubic curve `[a.middle, a.right, b.left, b.middle]`.

use alloc::vec::Vec;

use log::trace;

use crate::bezier::reserve;
use crate::control_point::PointId;
use crate::cubic_bezier::CubicBezier;
use crate::error::CurveError;
use crate::point::Point;

/// One of the three points of an anchor
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Handle {
    /// incoming tangent handle
    Left,
    /// on-curve point
    Middle,
    /// outgoing tangent handle
    Right,
}

/// An on-curve point with independent incoming and outgoing tangent handles.
/// Handles are not constrained to be collinear, so joints may be smooth or cusped.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Anchor<P> {
    pub id: PointId,
    pub order: usize,
    pub left: P,
    pub middle: P,
    pub right: P,
}

impl<P> Anchor<P>
where
    P: Point,
{
    /// Create an anchor with both handles collapsed onto the on-curve point.
    pub fn new(id: PointId, order: usize, position: P) -> Self {
        Anchor {
            id,
            order,
            left: position,
            middle: position,
            right: position,
        }
    }

    pub fn with_handles(id: PointId, order: usize, left: P, middle: P, right: P) -> Self {
        Anchor {
            id,
            order,
            left,
            middle,
            right,
        }
    }

    pub fn handle(&self, handle: Handle) -> P {
        match handle {
            Handle::Left => self.left,
            Handle::Middle => self.middle,
            Handle::Right => self.right,
        }
    }

    pub fn set_handle(&mut self, handle: Handle, position: P) {
        match handle {
            Handle::Left => self.left = position,
            Handle::Middle => self.middle = position,
            Handle::Right => self.right = position,
        }
    }

    /// The cubic segment leaving this anchor and arriving at `next`
    pub fn segment_to(&self, next: &Anchor<P>) -> CubicBezier<P> {
        CubicBezier::new(self.middle, self.right, next.left, next.middle)
    }
}

/// Iterate the cubic segments between consecutive anchors in ascending `order`.
/// The slice is not required to be sorted, anchors with equal `order` keep their slice order.
pub fn cubic_segments<P: Point>(anchors: &[Anchor<P>]) -> impl Iterator<Item = CubicBezier<P>> + '_ {
    let mut ordered: Vec<&Anchor<P>> = anchors.iter().collect();
    ordered.sort_by_key(|anchor| anchor.order);
    (1..ordered.len()).map(move |i| ordered[i - 1].segment_to(ordered[i]))
}

/// Sample a chain of cubic segments into one polyline.
///
/// Anchors are visited in ascending `order`, see `cubic_segments()`. Each segment contributes
/// `segments + 1` points via `sample_curve()`, so the point shared by two segments appears
/// twice: once as the exact end of the first segment and once as the t = 0 sample of the next. Fewer than two anchors yield an empty polyline.
/// Returns `CurveError::InvalidSampleCount` if `segments` is zero or the polyline would not fit
/// in memory.
pub fn sample_chain<P: Point>(
    anchors: &[Anchor<P>],
    segments: usize,
) -> Result<Vec<P>, CurveError> {
    if segments == 0 {
        return Err(CurveError::InvalidSampleCount);
    }
    if anchors.len() < 2 {
        return Ok(Vec::new());
    }
    trace!(
        "sampling chain of {} cubic segments with {} segments each",
        anchors.len() - 1,
        segments
    );

    let mut polyline = Vec::new();
    let len = segments
        .checked_add(1)
        .and_then(|per_segment| per_segment.checked_mul(anchors.len() - 1));
    reserve(&mut polyline, len)?;
    for cubic in cubic_segments(anchors) {
        polyline.extend(cubic.sample(segments)?);
    }
    Ok(polyline)
}

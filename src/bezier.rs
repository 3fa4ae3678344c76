use alloc::vec::Vec;
use core::slice;

use log::trace;
use num_traits::NumCast;

use crate::casteljau::reduce;
use crate::error::CurveError;
use crate::point::Point;

/// Sample the Bezier curve defined by the ordered `points` into a polyline of `segments + 1` points.
///
/// The first `segments` samples are taken at `t = k / segments` for `k` in `0..segments`, the last
/// sample is the final control point itself (not evaluated at t = 1) so the polyline ends exactly
/// on it. Reordering the points changes the curve: the control polygon is traversed in slice order.
///
/// An empty slice yields an empty polyline, a single point is repeated `segments + 1` times.
/// Returns `CurveError::InvalidSampleCount` if `segments` is zero or the polyline would not fit
/// in memory.
pub fn sample_curve<P: Point>(points: &[P], segments: usize) -> Result<Vec<P>, CurveError> {
    if segments == 0 {
        return Err(CurveError::InvalidSampleCount);
    }
    let last = match points.last() {
        Some(last) => *last,
        None => return Ok(Vec::new()),
    };
    trace!(
        "sampling degree {} curve with {} segments",
        points.len() - 1,
        segments
    );

    let n = scalar::<P>(segments)?;
    let mut polyline = Vec::new();
    reserve(&mut polyline, segments.checked_add(1))?;
    for k in 0..segments {
        let t = scalar::<P>(k)? / n;
        // points is not empty here, reduce always yields a point
        if let Some(p) = reduce(points, t) {
            polyline.push(p);
        }
    }
    polyline.push(last);
    Ok(polyline)
}

fn scalar<P: Point>(value: usize) -> Result<P::Scalar, CurveError> {
    <P::Scalar as NumCast>::from(value).ok_or(CurveError::ScalarConversion(value))
}

/// Reserve room for `len` samples, `None` meaning the count overflowed
pub(crate) fn reserve<P>(polyline: &mut Vec<P>, len: Option<usize>) -> Result<(), CurveError> {
    let len = len.ok_or(CurveError::InvalidSampleCount)?;
    polyline
        .try_reserve(len)
        .map_err(|_| CurveError::InvalidSampleCount)
}

/// General implementation of a Bezier curve of arbitrary degree (= number of control points - 1).
/// The curve is solely defined by its ordered 'control_points', their number is only known at runtime
/// which is what an interactive editor produces.
/// Points on the curve can be evaluated with an interpolation parameter 't' in interval [0,1] using eval().
#[derive(Clone, Debug, PartialEq)]
pub struct Bezier<P>
where
    P: Point,
{
    /// Control points which define the curve and hence its degree
    control_points: Vec<P>,
}

impl<P: Point> IntoIterator for Bezier<P> {
    type Item = P;
    type IntoIter = alloc::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.control_points.into_iter()
    }
}

impl<'a, P: Point> IntoIterator for &'a Bezier<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> slice::Iter<'a, P> {
        self.control_points.iter()
    }
}

impl<P: Point> FromIterator<P> for Bezier<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Bezier::new(iter.into_iter().collect())
    }
}

impl<P: Point> From<Vec<P>> for Bezier<P> {
    fn from(control_points: Vec<P>) -> Self {
        Bezier::new(control_points)
    }
}

impl<P> Bezier<P>
where
    P: Point,
{
    /// Create a new Bezier curve from the ordered `control_points`.
    /// An empty curve is allowed, it evaluates to nothing.
    pub fn new(control_points: Vec<P>) -> Bezier<P> {
        Bezier { control_points }
    }

    pub fn control_points(&self) -> &[P] {
        &self.control_points
    }

    pub fn is_empty(&self) -> bool {
        self.control_points.is_empty()
    }

    /// The degree of the curve, None for a curve without control points
    pub fn degree(&self) -> Option<usize> {
        self.control_points.len().checked_sub(1)
    }

    /// Evaluate a point on the curve at point 't' which should be in the interval [0,1]
    /// This is implemented using De Casteljau's algorithm, returns None for an empty curve.
    pub fn eval(&self, t: P::Scalar) -> Option<P> {
        reduce(&self.control_points, t)
    }

    /// Discretize the curve into `segments + 1` points, see `sample_curve()`.
    pub fn sample(&self, segments: usize) -> Result<Vec<P>, CurveError> {
        sample_curve(&self.control_points, segments)
    }
}

use alloc::vec::Vec;
use core::slice;

use log::{debug, trace};
use rand::Rng;

use super::{random_points, Canvas, CurvePreset, IdSource};
use crate::bezier::sample_curve;
use crate::control_point::{ControlPoint, PointId};
use crate::error::{CurveError, EditError};
use crate::point2::Point2;
use crate::sample_count::SampleCount;

/// The ordered control points of a single nth-order curve.
///
/// Points keep their id for their whole life, their `order` always equals their
/// position in the polygon and is recomputed whenever a point is removed.
#[derive(Debug, Clone, Default)]
pub struct ControlPolygon {
    points: Vec<ControlPoint<Point2<f64>>>,
    canvas: Canvas,
    ids: IdSource,
}

impl ControlPolygon {
    pub fn new(canvas: Canvas) -> Self {
        ControlPolygon {
            points: Vec::new(),
            canvas,
            ids: IdSource::default(),
        }
    }

    pub fn from_preset(preset: CurvePreset, canvas: Canvas) -> Result<Self, EditError> {
        let mut polygon = ControlPolygon::new(canvas);
        polygon.load_preset(preset)?;
        Ok(polygon)
    }

    /// Replace all points with the points of `preset`, every point gets a fresh id.
    pub fn load_preset(&mut self, preset: CurvePreset) -> Result<(), EditError> {
        let positions = preset.points(&self.canvas);
        self.replace(positions)?;
        debug!("loaded preset {} with {} points", preset.name(), self.points.len());
        Ok(())
    }

    /// Replace all points with 2 to 9 points placed at random on the canvas.
    pub fn load_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), EditError> {
        let positions = random_points(rng, &self.canvas);
        self.replace(positions)?;
        debug!("loaded random preset with {} points", self.points.len());
        Ok(())
    }

    /// Ids are allocated up front, on failure the current points are kept.
    fn replace(&mut self, positions: Vec<Point2<f64>>) -> Result<(), EditError> {
        let ids = positions
            .iter()
            .map(|_| self.ids.allocate())
            .collect::<Result<Vec<_>, _>>()?;
        self.points.clear();
        for (id, position) in ids.into_iter().zip(positions) {
            self.append(id, position);
        }
        Ok(())
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ControlPoint<Point2<f64>>] {
        &self.points
    }

    pub fn iter(&self) -> slice::Iter<'_, ControlPoint<Point2<f64>>> {
        self.points.iter()
    }

    pub fn get(&self, id: PointId) -> Option<&ControlPoint<Point2<f64>>> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Append a point at `position` (e.g. where the user clicked) and return its new id.
    pub fn push(&mut self, position: Point2<f64>) -> Result<PointId, EditError> {
        let id = self.ids.allocate()?;
        self.append(id, position);
        Ok(id)
    }

    /// Append a point with a caller-assigned id, which must not be in use.
    pub fn insert(&mut self, id: PointId, position: Point2<f64>) -> Result<(), EditError> {
        if self.get(id).is_some() {
            return Err(EditError::DuplicateId(id));
        }
        self.ids.reserve(id);
        self.append(id, position);
        Ok(())
    }

    fn append(&mut self, id: PointId, position: Point2<f64>) {
        let order = self.points.len();
        debug!("add point {} at ({}, {}) with order {}", id, position.x, position.y, order);
        self.points.push(ControlPoint::new(id, order, position));
    }

    /// Drag point `id` to `position`, clamped to the canvas. Returns the position actually applied.
    pub fn move_to(&mut self, id: PointId, position: Point2<f64>) -> Result<Point2<f64>, EditError> {
        let clamped = self.canvas.clamp(position);
        let point = self
            .points
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(EditError::UnknownId(id))?;
        trace!("move point {} to ({}, {})", id, clamped.x, clamped.y);
        point.position = clamped;
        Ok(clamped)
    }

    /// Remove point `id` and re-index the order of the remaining points.
    pub fn remove(&mut self, id: PointId) -> Result<ControlPoint<Point2<f64>>, EditError> {
        let index = self
            .points
            .iter()
            .position(|p| p.id == id)
            .ok_or(EditError::UnknownId(id))?;
        let removed = self.points.remove(index);
        for (order, point) in self.points.iter_mut().enumerate() {
            point.order = order;
        }
        debug!("removed point {}, {} points left", id, self.points.len());
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// The positions in curve order, i.e. the control polygon
    pub fn positions(&self) -> Vec<Point2<f64>> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Sample the curve of the current points, see `sample_curve()`.
    pub fn sample(&self, segments: SampleCount) -> Result<Vec<Point2<f64>>, CurveError> {
        sample_curve(&self.positions(), segments.get())
    }
}

impl<'a> IntoIterator for &'a ControlPolygon {
    type Item = &'a ControlPoint<Point2<f64>>;
    type IntoIter = slice::Iter<'a, ControlPoint<Point2<f64>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::RANDOM_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn orders(polygon: &ControlPolygon) -> Vec<usize> {
        polygon.iter().map(|p| p.order).collect()
    }

    #[test]
    fn push_assigns_ids_and_order() {
        let mut polygon = ControlPolygon::default();
        let a = polygon.push(Point2::new(10.0, 10.0)).unwrap();
        let b = polygon.push(Point2::new(20.0, 10.0)).unwrap();
        assert_ne!(a, b);
        assert_eq!(orders(&polygon), [0, 1]);
        assert_eq!(polygon.get(b).unwrap().position, Point2::new(20.0, 10.0));
    }

    #[test]
    fn remove_reindexes_densely() {
        let mut polygon = ControlPolygon::from_preset(CurvePreset::Heart, Canvas::default()).unwrap();
        let ids: Vec<PointId> = polygon.iter().map(|p| p.id).collect();

        let removed = polygon.remove(ids[2]).unwrap();
        assert_eq!(removed.order, 2);
        assert_eq!(polygon.len(), 6);
        assert_eq!(orders(&polygon), [0, 1, 2, 3, 4, 5]);
        // identity survives the shift in position
        assert_eq!(polygon.get(ids[3]).unwrap().order, 2);
        assert!(polygon.get(ids[2]).is_none());

        assert_eq!(polygon.remove(ids[2]), Err(EditError::UnknownId(ids[2])));
    }

    #[test]
    fn move_is_clamped_to_canvas() {
        let mut polygon = ControlPolygon::new(Canvas::new(100.0, 50.0));
        let id = polygon.push(Point2::new(10.0, 10.0)).unwrap();
        let applied = polygon.move_to(id, Point2::new(140.0, -5.0)).unwrap();
        assert_eq!(applied, Point2::new(100.0, 0.0));
        assert_eq!(polygon.get(id).unwrap().position, applied);

        assert_eq!(
            polygon.move_to(PointId(99), Point2::new(0.0, 0.0)),
            Err(EditError::UnknownId(PointId(99)))
        );
    }

    #[test]
    fn caller_assigned_ids() {
        let mut polygon = ControlPolygon::default();
        polygon.insert(PointId(7), Point2::new(1.0, 1.0)).unwrap();
        assert_eq!(
            polygon.insert(PointId(7), Point2::new(2.0, 2.0)),
            Err(EditError::DuplicateId(PointId(7)))
        );
        // generated ids skip past reserved ones
        let next = polygon.push(Point2::new(3.0, 3.0)).unwrap();
        assert_eq!(next, PointId(8));
        assert_eq!(orders(&polygon), [0, 1]);
    }

    #[test]
    fn sample_uses_curve_order() {
        let mut polygon = ControlPolygon::default();
        polygon.push(Point2::new(0.0, 0.0)).unwrap();
        let middle = polygon.push(Point2::new(10.0, 0.0)).unwrap();
        polygon.push(Point2::new(10.0, 10.0)).unwrap();
        let segments = SampleCount::new(2).unwrap();
        assert_eq!(
            polygon.sample(segments).unwrap(),
            [
                Point2::new(0.0, 0.0),
                Point2::new(7.5, 2.5),
                Point2::new(10.0, 10.0)
            ]
        );

        polygon.remove(middle).unwrap();
        // linear now
        assert_eq!(
            polygon.sample(segments).unwrap(),
            [
                Point2::new(0.0, 0.0),
                Point2::new(5.0, 5.0),
                Point2::new(10.0, 10.0)
            ]
        );
    }

    #[test]
    fn empty_polygon_samples_nothing() {
        let mut polygon = ControlPolygon::from_preset(CurvePreset::Cubic, Canvas::default()).unwrap();
        assert_eq!(polygon.sample(SampleCount::default()).unwrap().len(), 33);
        polygon.clear();
        assert!(polygon.sample(SampleCount::default()).unwrap().is_empty());
        polygon.load_preset(CurvePreset::Empty).unwrap();
        assert!(polygon.is_empty());
    }

    #[test]
    fn ids_unique_at_top_of_range() {
        let mut polygon = ControlPolygon::default();
        let first = polygon.push(Point2::new(1.0, 1.0)).unwrap();
        polygon.insert(PointId(u64::MAX), Point2::new(2.0, 2.0)).unwrap();
        // no generated id may collide with the ones in use
        assert_eq!(
            polygon.push(Point2::new(3.0, 3.0)),
            Err(EditError::IdsExhausted)
        );
        assert_eq!(polygon.len(), 2);
        assert_eq!(polygon.get(first).unwrap().position, Point2::new(1.0, 1.0));
        assert_eq!(
            polygon.load_preset(CurvePreset::Cubic),
            Err(EditError::IdsExhausted)
        );
        assert_eq!(polygon.len(), 2);
        // caller-assigned ids still work below the top
        polygon.insert(PointId(5), Point2::new(4.0, 4.0)).unwrap();
        assert_eq!(orders(&polygon), [0, 1, 2]);
    }

    #[test]
    fn random_preset_gets_fresh_ids() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut polygon = ControlPolygon::from_preset(CurvePreset::Linear, Canvas::default()).unwrap();
        let old: Vec<PointId> = polygon.iter().map(|p| p.id).collect();
        polygon.load_random(&mut rng).unwrap();
        assert!(RANDOM_COUNT.contains(&polygon.len()));
        assert_eq!(orders(&polygon), (0..polygon.len()).collect::<Vec<_>>());
        assert!(polygon.iter().all(|p| !old.contains(&p.id)));
        for p in &polygon {
            assert_eq!(polygon.canvas().clamp(p.position), p.position);
        }
    }
}

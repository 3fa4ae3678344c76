use alloc::vec::Vec;
use core::slice;

use log::{debug, trace};
use rand::Rng;

use super::{random_anchors, Canvas, ChainPreset, IdSource};
use crate::chain::{sample_chain, Anchor, Handle};
use crate::control_point::PointId;
use crate::error::{CurveError, EditError};
use crate::point2::Point2;
use crate::sample_count::SampleCount;

/// The ordered anchors of a chain of cubic segments.
///
/// A new anchor starts with both tangent handles on its on-curve point, dragging a handle
/// moves only that handle. `order` is kept dense like in `ControlPolygon`.
#[derive(Debug, Clone, Default)]
pub struct AnchorChain {
    anchors: Vec<Anchor<Point2<f64>>>,
    canvas: Canvas,
    ids: IdSource,
}

impl AnchorChain {
    pub fn new(canvas: Canvas) -> Self {
        AnchorChain {
            anchors: Vec::new(),
            canvas,
            ids: IdSource::default(),
        }
    }

    pub fn from_preset(preset: ChainPreset, canvas: Canvas) -> Result<Self, EditError> {
        let mut chain = AnchorChain::new(canvas);
        chain.load_preset(preset)?;
        Ok(chain)
    }

    /// Replace all anchors with the anchors of `preset`, every anchor gets a fresh id.
    pub fn load_preset(&mut self, preset: ChainPreset) -> Result<(), EditError> {
        let anchors = preset.anchors(&self.canvas);
        self.replace(anchors)?;
        debug!("loaded preset {} with {} anchors", preset.name(), self.anchors.len());
        Ok(())
    }

    /// Replace all anchors with 2 to 9 anchors whose three points are placed at random.
    pub fn load_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), EditError> {
        let anchors = random_anchors(rng, &self.canvas);
        self.replace(anchors)?;
        debug!("loaded random preset with {} anchors", self.anchors.len());
        Ok(())
    }

    /// Ids are allocated up front, on failure the current anchors are kept.
    fn replace(&mut self, anchors: Vec<[Point2<f64>; 3]>) -> Result<(), EditError> {
        let ids = anchors
            .iter()
            .map(|_| self.ids.allocate())
            .collect::<Result<Vec<_>, _>>()?;
        self.anchors = ids
            .into_iter()
            .zip(anchors)
            .enumerate()
            .map(|(order, (id, [left, middle, right]))| {
                Anchor::with_handles(id, order, left, middle, right)
            })
            .collect();
        Ok(())
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn anchors(&self) -> &[Anchor<Point2<f64>>] {
        &self.anchors
    }

    pub fn iter(&self) -> slice::Iter<'_, Anchor<Point2<f64>>> {
        self.anchors.iter()
    }

    pub fn get(&self, id: PointId) -> Option<&Anchor<Point2<f64>>> {
        self.anchors.iter().find(|a| a.id == id)
    }

    /// Append an anchor at `position` with collapsed handles and return its new id.
    pub fn push(&mut self, position: Point2<f64>) -> Result<PointId, EditError> {
        let id = self.ids.allocate()?;
        self.append(id, position);
        Ok(id)
    }

    /// Append an anchor with a caller-assigned id, which must not be in use.
    pub fn insert(&mut self, id: PointId, position: Point2<f64>) -> Result<(), EditError> {
        if self.get(id).is_some() {
            return Err(EditError::DuplicateId(id));
        }
        self.ids.reserve(id);
        self.append(id, position);
        Ok(())
    }

    fn append(&mut self, id: PointId, position: Point2<f64>) {
        let order = self.anchors.len();
        debug!("add anchor {} at ({}, {}) with order {}", id, position.x, position.y, order);
        self.anchors.push(Anchor::new(id, order, position));
    }

    /// Drag one handle of anchor `id` to `position`, clamped to the canvas.
    /// The other two points of the anchor stay where they are.
    pub fn move_handle(
        &mut self,
        id: PointId,
        handle: Handle,
        position: Point2<f64>,
    ) -> Result<Point2<f64>, EditError> {
        let clamped = self.canvas.clamp(position);
        let anchor = self
            .anchors
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(EditError::UnknownId(id))?;
        trace!("move {:?} handle of anchor {} to ({}, {})", handle, id, clamped.x, clamped.y);
        anchor.set_handle(handle, clamped);
        Ok(clamped)
    }

    /// Remove anchor `id` and re-index the order of the remaining anchors.
    pub fn remove(&mut self, id: PointId) -> Result<Anchor<Point2<f64>>, EditError> {
        let index = self
            .anchors
            .iter()
            .position(|a| a.id == id)
            .ok_or(EditError::UnknownId(id))?;
        let removed = self.anchors.remove(index);
        for (order, anchor) in self.anchors.iter_mut().enumerate() {
            anchor.order = order;
        }
        debug!("removed anchor {}, {} anchors left", id, self.anchors.len());
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.anchors.clear();
    }

    /// Sample the chain of the current anchors, see `sample_chain()`.
    pub fn sample(&self, segments: SampleCount) -> Result<Vec<Point2<f64>>, CurveError> {
        sample_chain(&self.anchors, segments.get())
    }
}

impl<'a> IntoIterator for &'a AnchorChain {
    type Item = &'a Anchor<Point2<f64>>;
    type IntoIter = slice::Iter<'a, Anchor<Point2<f64>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.anchors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::RANDOM_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_anchor_has_collapsed_handles() {
        let mut chain = AnchorChain::default();
        let id = chain.push(Point2::new(40.0, 60.0)).unwrap();
        let anchor = chain.get(id).unwrap();
        assert_eq!(anchor.left, anchor.middle);
        assert_eq!(anchor.right, anchor.middle);
        assert_eq!(anchor.order, 0);
    }

    #[test]
    fn move_handle_only_moves_that_handle() {
        let mut chain = AnchorChain::default();
        let id = chain.push(Point2::new(40.0, 60.0)).unwrap();
        chain
            .move_handle(id, Handle::Right, Point2::new(80.0, 60.0))
            .unwrap();
        let applied = chain
            .move_handle(id, Handle::Left, Point2::new(-10.0, 700.0))
            .unwrap();
        assert_eq!(applied, Point2::new(0.0, 500.0));

        let anchor = chain.get(id).unwrap();
        assert_eq!(anchor.left, Point2::new(0.0, 500.0));
        assert_eq!(anchor.middle, Point2::new(40.0, 60.0));
        assert_eq!(anchor.right, Point2::new(80.0, 60.0));

        assert_eq!(
            chain.move_handle(PointId(42), Handle::Middle, Point2::new(1.0, 1.0)),
            Err(EditError::UnknownId(PointId(42)))
        );
    }

    #[test]
    fn remove_reindexes_and_changes_segment_count() {
        let mut chain = AnchorChain::from_preset(ChainPreset::Heart, Canvas::default()).unwrap();
        let segments = SampleCount::new(8).unwrap();
        assert_eq!(chain.sample(segments).unwrap().len(), 6 * 9);

        let first = chain.anchors()[0].id;
        chain.remove(first).unwrap();
        let orders: Vec<usize> = chain.iter().map(|a| a.order).collect();
        assert_eq!(orders, [0, 1, 2, 3, 4, 5]);
        assert_eq!(chain.sample(segments).unwrap().len(), 5 * 9);
    }

    #[test]
    fn chain_needs_two_anchors() {
        let mut chain = AnchorChain::default();
        let segments = SampleCount::default();
        assert!(chain.sample(segments).unwrap().is_empty());
        chain.push(Point2::new(0.0, 0.0)).unwrap();
        assert!(chain.sample(segments).unwrap().is_empty());
        chain.push(Point2::new(100.0, 0.0)).unwrap();
        let polyline = chain.sample(segments).unwrap();
        assert_eq!(polyline.len(), 33);
        assert_eq!(polyline[32], Point2::new(100.0, 0.0));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut chain = AnchorChain::from_preset(ChainPreset::Curve, Canvas::default()).unwrap();
        let taken = chain.anchors()[1].id;
        assert_eq!(
            chain.insert(taken, Point2::new(1.0, 1.0)),
            Err(EditError::DuplicateId(taken))
        );
        chain.insert(PointId(100), Point2::new(1.0, 1.0)).unwrap();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.get(PointId(100)).unwrap().order, 2);
    }

    #[test]
    fn ids_unique_at_top_of_range() {
        let mut chain = AnchorChain::default();
        let first = chain.push(Point2::new(1.0, 1.0)).unwrap();
        chain.insert(PointId(u64::MAX), Point2::new(2.0, 2.0)).unwrap();
        assert_eq!(chain.push(Point2::new(3.0, 3.0)), Err(EditError::IdsExhausted));
        assert_eq!(
            chain.load_preset(ChainPreset::Curve),
            Err(EditError::IdsExhausted)
        );
        // the failed load left the chain alone
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.anchors()[0].id, first);
    }

    #[test]
    fn random_preset_anchors_on_canvas() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut chain = AnchorChain::new(Canvas::new(320.0, 200.0));
        chain.load_random(&mut rng).unwrap();
        assert!(RANDOM_COUNT.contains(&chain.len()));
        for anchor in &chain {
            for handle in [Handle::Left, Handle::Middle, Handle::Right] {
                let p = anchor.handle(handle);
                assert_eq!(chain.canvas().clamp(p), p);
            }
        }
        let segments = SampleCount::new(4).unwrap();
        assert_eq!(chain.sample(segments).unwrap().len(), (chain.len() - 1) * 5);
    }
}

//! Editing model for interactive curve editors.
//!
//! The samplers are pure and only ever see a snapshot of points. The types in here own the
//! mutable side: points with stable ids that are added on click, dragged inside the canvas
//! and removed again, with their `order` kept dense. `ControlPolygon` feeds `sample_curve()`,
//! `AnchorChain` feeds `sample_chain()`.

mod anchor_chain;
mod canvas;
mod control_polygon;
mod preset;

pub use self::anchor_chain::AnchorChain;
pub use self::canvas::Canvas;
pub use self::control_polygon::ControlPolygon;
pub use self::preset::{random_anchors, random_points, ChainPreset, CurvePreset, RANDOM_COUNT};
pub use crate::control_point::PointId;

use crate::error::EditError;

/// Hands out ids that are not in use yet.
/// Caller-assigned ids move the counter past them so generated ids never collide.
/// Once `u64::MAX` has been handed out or reserved the source is exhausted.
#[derive(Debug, Clone)]
struct IdSource {
    next: Option<u64>,
}

impl Default for IdSource {
    fn default() -> Self {
        IdSource { next: Some(0) }
    }
}

impl IdSource {
    fn allocate(&mut self) -> Result<PointId, EditError> {
        let id = self.next.ok_or(EditError::IdsExhausted)?;
        self.next = id.checked_add(1);
        Ok(PointId(id))
    }

    fn reserve(&mut self, id: PointId) {
        if let Some(next) = self.next {
            if id.0 >= next {
                self.next = id.0.checked_add(1);
            }
        }
    }
}

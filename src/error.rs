//! Error types of the samplers and the editing model.

use thiserror::Error;

use crate::control_point::PointId;

/// Errors reported by curve evaluation and sample count validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// The number of segments is zero, negative, not an integer, could not be parsed
    /// or yields more samples than fit in memory.
    #[error("invalid sample count: segments must be a positive integer")]
    InvalidSampleCount,
    /// A sample index could not be represented in the scalar type of the points.
    #[error("sample index {0} is not representable in the point scalar type")]
    ScalarConversion(usize),
}

/// Errors reported by the editing model when addressing points by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// A caller-assigned id is already used by another point.
    #[error("a point with id {0} already exists")]
    DuplicateId(PointId),
    /// No point carries the given id.
    #[error("no point with id {0}")]
    UnknownId(PointId),
    /// Every id up to `u64::MAX` has been handed out or reserved.
    #[error("no unused point ids left")]
    IdsExhausted,
}

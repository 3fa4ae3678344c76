//! Sampling of Bézier curves with De Casteljau's algorithm.
//!
//! Two kinds of curves are supported:
//! - a single curve of arbitrary degree over an ordered list of control points
//!   ([`sample_curve`], [`Bezier`])
//! - a chain of cubic segments joined at anchors, every anchor carrying an on-curve point
//!   and independent incoming/outgoing tangent handles ([`sample_chain`], [`Anchor`])
//!
//! Both are discretized into a polyline of `segments + 1` points per curve whose last point
//! is exactly the last control point. Everything is built on one primitive, the De Casteljau
//! reduction [`reduce`], and works with any point type implementing the small [`Point`] trait.
//!
//! The [`editor`] module holds the mutable side of an interactive editor: control points and
//! anchors with stable ids, dense ordering, canvas clamping and presets.
//!
//! # Example
//! ```rust
//! use casteljau::{sample_curve, Point2};
//!
//! let points = [
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     Point2::new(10.0, 10.0),
//! ];
//! let polyline = sample_curve(&points, 2).unwrap();
//! assert_eq!(
//!     polyline,
//!     [Point2::new(0.0, 0.0), Point2::new(7.5, 2.5), Point2::new(10.0, 10.0)]
//! );
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bezier;
pub mod casteljau;
pub mod chain;
pub mod control_point;
pub mod cubic_bezier;
pub mod editor;
pub mod error;
pub mod point;
pub mod point2;
pub mod sample_count;

pub use bezier::{sample_curve, Bezier};
pub use casteljau::reduce;
pub use chain::{cubic_segments, sample_chain, Anchor, Handle};
pub use control_point::{ControlPoint, PointId};
pub use cubic_bezier::CubicBezier;
pub use error::{CurveError, EditError};
pub use point::Point;
pub use point2::Point2;
pub use sample_count::SampleCount;

// absolute error tolerance for comparisons that are not exact by contract
#[cfg(test)]
const EPSILON: f64 = 1e-10;

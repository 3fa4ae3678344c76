use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

/// Trait defined over generic points P which themselves are generic over their Scalar.
/// Many libraries already provide Point-types and the mathematical operations
/// that we need for working with curves, so that implementing methods requires mostly wrapping.
/// Keeping the trait as minimal as possible to make integration with other libraries easy
pub trait Point:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<<Self as Point>::Scalar, Output = Self>
    + Copy
    + PartialEq
    + Default
    + Debug
{
    type Scalar: Float + Debug;

    /// Linear interpolation `self + t * (other - self)`, applied to every axis.
    /// `t` is not clamped, values outside of [0,1] extrapolate along the line.
    #[inline]
    fn lerp(self, other: Self, t: Self::Scalar) -> Self {
        self + (other - self) * t
    }
}

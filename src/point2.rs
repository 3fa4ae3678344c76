use core::fmt::Debug;
use core::ops::{Add, Mul, Sub};

use num_traits::Float;

use super::point::Point;

/// Two-dimensional point / vector with coordinates of a float type `T`.
/// This is the value type the curve samplers and the editing model hand around,
/// any other type implementing the (small) `Point` trait works with the samplers as well.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point2<T> {
    pub(crate) x: T,
    pub(crate) y: T,
}

impl<T> Point2<T>
where
    T: Float,
{
    pub fn new(x: T, y: T) -> Self {
        Point2 { x, y }
    }

    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    /// Interprets the Point2 as a vector and returns its norm (distance from origin)
    pub fn length(&self) -> T {
        self.squared_length().sqrt()
    }

    pub fn squared_length(&self) -> T {
        self.x * self.x + self.y * self.y
    }
}

impl<T> Add for Point2<T>
where
    T: Add<Output = T>,
{
    type Output = Self;

    fn add(self, other: Point2<T>) -> Point2<T> {
        Point2 {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Point2<T>
where
    T: Sub<Output = T>,
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Point2 {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Point2<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Point2<T>;

    fn mul(self, rhs: T) -> Point2<T> {
        Point2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<T> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<[T; 2]> for Point2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Point2 { x, y }
    }
}

impl<T> From<Point2<T>> for (T, T) {
    fn from(p: Point2<T>) -> Self {
        (p.x, p.y)
    }
}

impl<T> Point for Point2<T>
where
    T: Float + Default + Debug,
{
    type Scalar = T;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EPSILON;

    #[test]
    fn lerp_is_affine_per_axis() {
        let a = Point2::new(0f64, 0f64);
        let b = Point2::new(10f64, 4f64);

        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 0.5), Point2::new(5.0, 2.0));
        assert_eq!(a.lerp(b, 1.0), b);
        // no clamping, t outside of [0,1] extrapolates
        assert_eq!(a.lerp(b, 2.0), Point2::new(20.0, 8.0));
        assert_eq!(a.lerp(b, -1.0), Point2::new(-10.0, -4.0));
    }

    #[test]
    fn length_pythagorean() {
        let q = Point2::new(3f64, 4f64);
        assert!((q.length() - 5.0).abs() < EPSILON);
        assert_eq!(q.squared_length(), 25.0);
    }

    #[test]
    fn tuple_conversions() {
        let p: Point2<f32> = (1.5, -2.0).into();
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -2.0);
        let q: Point2<f32> = [1.5, -2.0].into();
        assert_eq!(p, q);
        let t: (f32, f32) = q.into();
        assert_eq!(t, (1.5, -2.0));
    }
}

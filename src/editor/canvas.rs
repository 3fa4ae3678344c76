use crate::point2::Point2;

/// The rectangular drawing area handles live in, spanning `[0, width] × [0, height]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const DEFAULT_WIDTH: f64 = 500.0;
    pub const DEFAULT_HEIGHT: f64 = 500.0;

    pub fn new(width: f64, height: f64) -> Self {
        Canvas { width, height }
    }

    /// Restrict a dragged position to the canvas
    pub fn clamp(&self, position: Point2<f64>) -> Point2<f64> {
        Point2::new(
            position.x.max(0.0).min(self.width),
            position.y.max(0.0).min(self.height),
        )
    }

    /// The point at the given fractions of the canvas size
    pub fn at(&self, fx: f64, fy: f64) -> Point2<f64> {
        Point2::new(fx * self.width, fy * self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Canvas::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_to_bounds() {
        let canvas = Canvas::default();
        assert_eq!(canvas.clamp(Point2::new(-20.0, 30.0)), Point2::new(0.0, 30.0));
        assert_eq!(canvas.clamp(Point2::new(600.0, 510.0)), Point2::new(500.0, 500.0));
        assert_eq!(canvas.clamp(Point2::new(12.5, 480.0)), Point2::new(12.5, 480.0));
    }

    #[test]
    fn fractions_of_size() {
        let canvas = Canvas::new(200.0, 100.0);
        assert_eq!(canvas.at(0.25, 0.75), Point2::new(50.0, 75.0));
        assert_eq!(canvas.at(1.0, 1.0), Point2::new(200.0, 100.0));
    }
}

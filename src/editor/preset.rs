use alloc::vec::Vec;
use core::ops::RangeInclusive;

use rand::Rng;

use super::Canvas;
use crate::point2::Point2;

/// Predefined control polygons for a single nth-order curve.
/// Coordinates are fractions of the canvas size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum CurvePreset {
    Empty,
    Linear,
    Quadratic,
    Cubic,
    #[default]
    Heart,
}

const LINEAR: [(f64, f64); 2] = [(0.25, 0.25), (0.75, 0.75)];
const QUADRATIC: [(f64, f64); 3] = [(0.25, 0.75), (0.5, 0.25), (0.75, 0.75)];
const CUBIC: [(f64, f64); 4] = [(0.25, 0.75), (0.25, 0.25), (0.75, 0.25), (0.75, 0.75)];
const HEART: [(f64, f64); 7] = [
    (0.5, 0.75),
    (0.0, 0.25),
    (0.9, 0.2),
    (0.5, 1.0),
    (0.1, 0.2),
    (1.0, 0.25),
    (0.5, 0.725),
];

impl CurvePreset {
    pub const ALL: [CurvePreset; 5] = [
        CurvePreset::Empty,
        CurvePreset::Linear,
        CurvePreset::Quadratic,
        CurvePreset::Cubic,
        CurvePreset::Heart,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CurvePreset::Empty => "empty",
            CurvePreset::Linear => "linear",
            CurvePreset::Quadratic => "quadratic",
            CurvePreset::Cubic => "cubic",
            CurvePreset::Heart => "heart",
        }
    }

    fn fractions(self) -> &'static [(f64, f64)] {
        match self {
            CurvePreset::Empty => &[],
            CurvePreset::Linear => &LINEAR,
            CurvePreset::Quadratic => &QUADRATIC,
            CurvePreset::Cubic => &CUBIC,
            CurvePreset::Heart => &HEART,
        }
    }

    /// The control points of the preset scaled to `canvas`, in curve order
    pub fn points(self, canvas: &Canvas) -> Vec<Point2<f64>> {
        self.fractions()
            .iter()
            .map(|&(fx, fy)| canvas.at(fx, fy))
            .collect()
    }
}

/// Predefined anchor chains, each anchor given as `[left, middle, right]` fractions of the canvas size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum ChainPreset {
    Empty,
    Curve,
    #[default]
    Heart,
}

type AnchorFractions = [(f64, f64); 3];

const CHAIN_CURVE: [AnchorFractions; 2] = [
    [(0.25, 0.75), (0.25, 0.75), (0.25, 0.25)],
    [(0.75, 0.25), (0.75, 0.75), (0.75, 0.75)],
];
const CHAIN_HEART: [AnchorFractions; 7] = [
    [(0.5, 0.9), (0.5, 0.9), (0.2, 0.6)],
    [(0.1, 0.5), (0.1, 0.3), (0.1, 0.2)],
    [(0.2, 0.1), (0.3, 0.1), (0.4, 0.1)],
    [(0.45, 0.15), (0.5, 0.25), (0.55, 0.15)],
    [(0.6, 0.1), (0.7, 0.1), (0.8, 0.1)],
    [(0.9, 0.2), (0.9, 0.3), (0.9, 0.5)],
    [(0.8, 0.575), (0.5, 0.875), (0.5, 0.875)],
];

impl ChainPreset {
    pub const ALL: [ChainPreset; 3] = [ChainPreset::Empty, ChainPreset::Curve, ChainPreset::Heart];

    pub fn name(self) -> &'static str {
        match self {
            ChainPreset::Empty => "empty",
            ChainPreset::Curve => "curve",
            ChainPreset::Heart => "heart",
        }
    }

    fn fractions(self) -> &'static [AnchorFractions] {
        match self {
            ChainPreset::Empty => &[],
            ChainPreset::Curve => &CHAIN_CURVE,
            ChainPreset::Heart => &CHAIN_HEART,
        }
    }

    /// The `[left, middle, right]` points of every anchor scaled to `canvas`, in chain order
    pub fn anchors(self, canvas: &Canvas) -> Vec<[Point2<f64>; 3]> {
        self.fractions()
            .iter()
            .map(|&anchor| anchor.map(|(fx, fy)| canvas.at(fx, fy)))
            .collect()
    }
}

/// Number of points or anchors a random preset has
pub const RANDOM_COUNT: RangeInclusive<usize> = 2..=9;

fn random_position<R: Rng + ?Sized>(rng: &mut R, canvas: &Canvas) -> Point2<f64> {
    Point2::new(
        rng.gen_range(0.0..=canvas.width),
        rng.gen_range(0.0..=canvas.height),
    )
}

/// Between 2 and 9 control points anywhere on the canvas.
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, canvas: &Canvas) -> Vec<Point2<f64>> {
    let count = rng.gen_range(RANDOM_COUNT);
    (0..count).map(|_| random_position(rng, canvas)).collect()
}

/// Between 2 and 9 anchors, all three points of each placed independently on the canvas.
pub fn random_anchors<R: Rng + ?Sized>(rng: &mut R, canvas: &Canvas) -> Vec<[Point2<f64>; 3]> {
    let count = rng.gen_range(RANDOM_COUNT);
    (0..count)
        .map(|_| {
            [
                random_position(rng, canvas),
                random_position(rng, canvas),
                random_position(rng, canvas),
            ]
        })
        .collect()
}

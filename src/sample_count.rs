use core::fmt;
use core::num::NonZeroUsize;
use core::str::FromStr;

use num_traits::Float;

use crate::error::CurveError;

/// Number of segments a curve is discretized into, always at least one.
///
/// The samplers take a plain `usize` and reject zero, this type moves that check to the
/// boundary where user input (a number field, a config value) enters the program.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SampleCount(NonZeroUsize);

impl SampleCount {
    /// Resolution used when nothing else is configured
    pub const DEFAULT: SampleCount = match NonZeroUsize::new(32) {
        Some(n) => SampleCount(n),
        None => panic!("default sample count must be positive"),
    };

    pub fn new(segments: usize) -> Result<Self, CurveError> {
        NonZeroUsize::new(segments)
            .map(SampleCount)
            .ok_or(CurveError::InvalidSampleCount)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for SampleCount {
    fn default() -> Self {
        SampleCount::DEFAULT
    }
}

impl fmt::Display for SampleCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SampleCount> for usize {
    fn from(count: SampleCount) -> Self {
        count.get()
    }
}

impl TryFrom<usize> for SampleCount {
    type Error = CurveError;

    fn try_from(segments: usize) -> Result<Self, Self::Error> {
        SampleCount::new(segments)
    }
}

/// Rejects zero and negative counts
impl TryFrom<i64> for SampleCount {
    type Error = CurveError;

    fn try_from(segments: i64) -> Result<Self, Self::Error> {
        let segments = usize::try_from(segments).map_err(|_| CurveError::InvalidSampleCount)?;
        SampleCount::new(segments)
    }
}

/// Rejects non-finite, fractional, zero and negative counts
impl TryFrom<f64> for SampleCount {
    type Error = CurveError;

    fn try_from(segments: f64) -> Result<Self, Self::Error> {
        if !segments.is_finite() || Float::fract(segments) != 0.0 || segments < 1.0 {
            return Err(CurveError::InvalidSampleCount);
        }
        let segments =
            <usize as num_traits::NumCast>::from(segments).ok_or(CurveError::InvalidSampleCount)?;
        SampleCount::new(segments)
    }
}

/// Parses a decimal integer, surrounding whitespace is ignored
impl FromStr for SampleCount {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: usize = s
            .trim()
            .parse()
            .map_err(|_| CurveError::InvalidSampleCount)?;
        SampleCount::new(segments)
    }
}

use crate::error::{DistanceError, Result};
use ndarray::{ArrayView1, ArrayView2, ScalarOperand};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};
use std::iter::Sum;

pub trait LibData:
    'static
    + Clone
    + Send
    + Default
    + Sync
    + Debug
    + Float
    + FromPrimitive
    + Sum
    + ScalarOperand
    + Display
{
    const INFINITY: Self;
}

impl LibData for f32 {
    const INFINITY: Self = Self::INFINITY;
}

impl LibData for f64 {
    const INFINITY: Self = Self::INFINITY;
}

/// Time-major, contiguous copy of a `features × time` series.
///
/// The DP loops only ever look at one time step at a time, so every step is
/// kept as its own contiguous slice of length `n_features`.
pub(crate) struct Frames<A: LibData> {
    data: Vec<A>,
    n_features: usize,
    len: usize,
}

impl<A: LibData> Frames<A> {
    pub fn from_series(series: ArrayView2<A>) -> Self {
        let (n_features, len) = series.dim();
        // iterating the transposed view walks time step by time step
        let data = series.t().iter().cloned().collect();
        Self {
            data,
            n_features,
            len,
        }
    }

    pub fn from_feature(feature: ArrayView1<A>) -> Self {
        Self {
            data: feature.iter().cloned().collect(),
            n_features: 1,
            len: feature.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn frame(&self, t: usize) -> &[A] {
        &self.data[t * self.n_features..(t + 1) * self.n_features]
    }
}

/// Turns a non-negative threshold on `|i - j|` into an exclusive bound on the
/// integer offset. `None` means the threshold never rejects an offset.
pub(crate) fn offset_bound<A: LibData>(delta: A) -> Option<usize> {
    if delta.is_infinite() {
        return None;
    }
    delta.ceil().to_usize()
}

/// Converts a table count (matches, edits, lengths) into the float type.
pub(crate) fn from_count<A: LibData>(count: usize) -> Result<A> {
    A::from_usize(count).ok_or_else(|| {
        DistanceError::DegenerateInput(format!("count {} is not representable", count))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_frames_are_time_major() {
        let series = arr2(&[[0.0, 1.0, 2.0], [10.0, 11.0, 12.0]]);
        let frames = Frames::from_series(series.view());

        assert_eq!(frames.len(), 3);
        assert_eq!(frames.frame(0), &[0.0, 10.0]);
        assert_eq!(frames.frame(2), &[2.0, 12.0]);
    }

    #[test]
    fn test_frames_from_feature() {
        let feature = arr1(&[3.0f32, 4.0]);
        let frames = Frames::from_feature(feature.view());

        assert_eq!(frames.len(), 2);
        assert_eq!(frames.frame(1), &[4.0]);
    }

    #[test]
    fn test_from_count() {
        assert_eq!(from_count::<f32>(12).unwrap(), 12.0);
        assert_eq!(from_count::<f64>(0).unwrap(), 0.0);
    }

    #[test]
    fn test_offset_bound() {
        assert_eq!(offset_bound(2.0f64), Some(2));
        assert_eq!(offset_bound(1.5f64), Some(2));
        assert_eq!(offset_bound(0.0f64), Some(0));
        assert_eq!(offset_bound(f64::INFINITY), None);
    }
}

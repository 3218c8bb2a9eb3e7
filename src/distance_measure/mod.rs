use crate::error::{DistanceError, Result};
use crate::utils::LibData;
use ndarray::ArrayView2;

pub mod dtw;
pub mod edr;
pub mod lcss;
pub mod manhattan;

pub use dtw::{dtw_distance, Dtw, DtwMode};
pub use edr::{edr_distance, Edr};
pub use lcss::{lcss_distance, Lcss};

/// A distance between two series in `features × time` layout.
pub trait DistanceMeasure<A: LibData>: Send + Sync {
    fn distance(&self, series_a: ArrayView2<A>, series_b: ArrayView2<A>) -> Result<A>;
    fn name(&self) -> &'static str;
}

pub(crate) fn check_threshold<A: LibData>(name: &str, value: A) -> Result<()> {
    if value.is_nan() || value < A::zero() {
        return Err(DistanceError::InvalidArgument(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}

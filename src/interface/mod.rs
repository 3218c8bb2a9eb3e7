pub use crate::interface::parameters::Parameters;
use crate::distance_measure::{DistanceMeasure, Dtw, Edr, Lcss};
use crate::error::Result;
use crate::utils::LibData;
use ndarray::ArrayView2;

mod parameters;

/// One of the supported measures, chosen at runtime.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Metric<A: LibData> {
    Dtw(Dtw),
    Lcss(Lcss<A>),
    Edr(Edr<A>),
}

impl<A: LibData> DistanceMeasure<A> for Metric<A> {
    fn distance(&self, series_a: ArrayView2<A>, series_b: ArrayView2<A>) -> Result<A> {
        match self {
            Metric::Dtw(measure) => measure.distance(series_a, series_b),
            Metric::Lcss(measure) => measure.distance(series_a, series_b),
            Metric::Edr(measure) => measure.distance(series_a, series_b),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Metric::Dtw(measure) => DistanceMeasure::<A>::name(measure),
            Metric::Lcss(measure) => measure.name(),
            Metric::Edr(measure) => measure.name(),
        }
    }
}

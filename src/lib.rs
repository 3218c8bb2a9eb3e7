pub mod distance_measure;
mod error;
pub mod interface;
pub mod normalize;
mod parallel;
#[cfg(feature = "python")]
mod python_binding;
#[cfg(test)]
mod test_utils;
mod utils;

pub use distance_measure::{
    dtw_distance, edr_distance, lcss_distance, DistanceMeasure, Dtw, DtwMode, Edr, Lcss,
};
pub use error::DistanceError;
pub use interface::{Metric, Parameters};
pub use normalize::{check_arrays, normalize, standardize};
pub use parallel::PairwiseDistance;
pub use utils::LibData;

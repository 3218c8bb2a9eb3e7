use crate::distance_measure::manhattan::within_epsilon;
use crate::distance_measure::{check_threshold, DistanceMeasure};
use crate::error::{DistanceError, Result};
use crate::normalize::{check_arrays, check_features};
use crate::utils::{from_count, offset_bound, Frames, LibData};
use ndarray::{ArrayBase, ArrayView2, Data, Dimension};

/// Longest common subsequence distance (Vlachos et al., 2002).
///
/// Two time steps match when every feature differs by less than `epsilon`
/// and their indices are less than `delta` apart. The distance is
/// `1 - matches / min(n, m)`. Either threshold may be infinite.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Lcss<A: LibData> {
    pub delta: A,
    pub epsilon: A,
}

impl<A: LibData> Lcss<A> {
    pub fn new(delta: A, epsilon: A) -> Result<Self> {
        check_threshold("delta", delta)?;
        check_threshold("epsilon", epsilon)?;
        Ok(Self { delta, epsilon })
    }
}

impl<A: LibData> DistanceMeasure<A> for Lcss<A> {
    fn distance(&self, x: ArrayView2<A>, y: ArrayView2<A>) -> Result<A> {
        check_features(x, y)?;
        check_threshold("delta", self.delta)?;
        check_threshold("epsilon", self.epsilon)?;

        let shorter = x.ncols().min(y.ncols());
        if shorter == 0 {
            return Err(DistanceError::DegenerateInput(format!(
                "LCSS is undefined for series of lengths {} and {}",
                x.ncols(),
                y.ncols()
            )));
        }

        let matches = longest_common_subsequence(
            &Frames::from_series(x),
            &Frames::from_series(y),
            offset_bound(self.delta),
            self.epsilon,
        );

        Ok(A::one() - from_count::<A>(matches)? / from_count::<A>(shorter)?)
    }

    fn name(&self) -> &'static str {
        "lcss"
    }
}

/// LCSS distance between two 1-D or 2-D (`features × time`) series.
pub fn lcss_distance<A, S1, D1, S2, D2>(
    x: &ArrayBase<S1, D1>,
    y: &ArrayBase<S2, D2>,
    delta: A,
    epsilon: A,
) -> Result<A>
where
    A: LibData,
    S1: Data<Elem = A>,
    D1: Dimension,
    S2: Data<Elem = A>,
    D2: Dimension,
{
    let measure = Lcss::new(delta, epsilon)?;
    let (x, y) = check_arrays(x, y)?;
    measure.distance(x.view(), y.view())
}

/// Number of matched time steps. `max_offset` is an exclusive bound on `|i - j|`.
fn longest_common_subsequence<A: LibData>(
    x: &Frames<A>,
    y: &Frames<A>,
    max_offset: Option<usize>,
    epsilon: A,
) -> usize {
    let (n, m) = (x.len(), y.len());
    let mut previous = vec![0usize; m + 1];
    let mut current = vec![0usize; m + 1];

    for i in 1..=n {
        let frame = x.frame(i - 1);
        for j in 1..=m {
            let close_in_time = max_offset.map_or(true, |bound| i.abs_diff(j) < bound);
            current[j] = if close_in_time && within_epsilon(frame, y.frame(j - 1), epsilon) {
                previous[j - 1] + 1
            } else {
                current[j - 1].max(previous[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[m]
}

use crate::distance_measure::manhattan::within_epsilon;
use crate::distance_measure::{check_threshold, DistanceMeasure};
use crate::error::{DistanceError, Result};
use crate::normalize::{check_arrays, check_features, standardize};
use crate::utils::{from_count, Frames, LibData};
use log::debug;
use ndarray::{ArrayBase, ArrayView2, Data, Dimension};

/// Edit distance on real sequences (Chen et al., 2005).
///
/// Both series are z-normalized per feature first. A substitution is free
/// when every feature differs by less than `epsilon`, every other edit costs
/// one. The edit count is divided by `max(n, m)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edr<A: LibData> {
    pub epsilon: A,
}

impl<A: LibData> Edr<A> {
    pub fn new(epsilon: A) -> Result<Self> {
        check_threshold("epsilon", epsilon)?;
        Ok(Self { epsilon })
    }
}

impl<A: LibData> DistanceMeasure<A> for Edr<A> {
    fn distance(&self, x: ArrayView2<A>, y: ArrayView2<A>) -> Result<A> {
        check_features(x, y)?;
        check_threshold("epsilon", self.epsilon)?;

        let (n, m) = (x.ncols(), y.ncols());
        if n == 0 && m == 0 {
            return Err(DistanceError::DegenerateInput(
                "EDR is undefined for two empty series".into(),
            ));
        }
        if n == 0 || m == 0 {
            debug!("EDR against an empty series of lengths {} and {}.", n, m);
            return Ok(A::one());
        }

        let x = standardize(x)?;
        let y = standardize(y)?;
        let edits = edit_distance(
            &Frames::from_series(x.view()),
            &Frames::from_series(y.view()),
            self.epsilon,
        );

        Ok(from_count::<A>(edits)? / from_count::<A>(n.max(m))?)
    }

    fn name(&self) -> &'static str {
        "edr"
    }
}

/// EDR distance between two 1-D or 2-D (`features × time`) series.
pub fn edr_distance<A, S1, D1, S2, D2>(
    x: &ArrayBase<S1, D1>,
    y: &ArrayBase<S2, D2>,
    epsilon: A,
) -> Result<A>
where
    A: LibData,
    S1: Data<Elem = A>,
    D1: Dimension,
    S2: Data<Elem = A>,
    D2: Dimension,
{
    let measure = Edr::new(epsilon)?;
    let (x, y) = check_arrays(x, y)?;
    measure.distance(x.view(), y.view())
}

fn edit_distance<A: LibData>(x: &Frames<A>, y: &Frames<A>, epsilon: A) -> usize {
    let (n, m) = (x.len(), y.len());
    let mut previous: Vec<usize> = (0..=m).collect();
    let mut current = vec![0usize; m + 1];

    for i in 1..=n {
        let frame = x.frame(i - 1);
        current[0] = i;
        for j in 1..=m {
            let substitution = if within_epsilon(frame, y.frame(j - 1), epsilon) {
                0
            } else {
                1
            };
            current[j] = (previous[j - 1] + substitution)
                .min(previous[j] + 1)
                .min(current[j - 1] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[m]
}

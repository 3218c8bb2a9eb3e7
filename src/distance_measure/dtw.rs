use crate::distance_measure::manhattan::manhattan;
use crate::distance_measure::DistanceMeasure;
use crate::error::{DistanceError, Result};
use crate::normalize::{check_arrays, check_features};
use crate::utils::{Frames, LibData};
use log::debug;
use ndarray::{ArrayBase, ArrayView2, Axis, Data, Dimension};
use std::fmt;
use std::str::FromStr;

/// How multivariate series are warped.
///
/// `Dependent` finds one warping path for all features together,
/// `Independent` warps every feature on its own and sums the distances.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DtwMode {
    Dependent,
    Independent,
}

impl Default for DtwMode {
    fn default() -> Self {
        DtwMode::Dependent
    }
}

impl FromStr for DtwMode {
    type Err = DistanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dependent" => Ok(DtwMode::Dependent),
            "independent" => Ok(DtwMode::Independent),
            _ => Err(DistanceError::InvalidArgument(format!(
                "The mode must be either \"dependent\" or \"independent\", got \"{}\".",
                s
            ))),
        }
    }
}

impl fmt::Display for DtwMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DtwMode::Dependent => write!(f, "dependent"),
            DtwMode::Independent => write!(f, "independent"),
        }
    }
}

/// Dynamic time warping with L1 point cost and an optional Sakoe-Chiba band.
///
/// `window: None` leaves the band unbounded. A window narrower than the
/// length difference of the two series is widened to that difference, so
/// the last cell is always reachable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Dtw {
    pub window: Option<usize>,
    pub mode: DtwMode,
}

impl Dtw {
    pub fn new(window: Option<usize>, mode: DtwMode) -> Self {
        Self { window, mode }
    }
}

impl<A: LibData> DistanceMeasure<A> for Dtw {
    fn distance(&self, x: ArrayView2<A>, y: ArrayView2<A>) -> Result<A> {
        check_features(x, y)?;

        // without features there is nothing to split, both modes warp the bare time axis
        let distance = match self.mode {
            DtwMode::Independent if x.nrows() > 0 => x
                .axis_iter(Axis(0))
                .zip(y.axis_iter(Axis(0)))
                .map(|(x_, y_)| {
                    warp(
                        &Frames::from_feature(x_),
                        &Frames::from_feature(y_),
                        self.window,
                    )
                })
                .sum(),
            _ => warp(
                &Frames::from_series(x),
                &Frames::from_series(y),
                self.window,
            ),
        };

        Ok(distance)
    }

    fn name(&self) -> &'static str {
        "dtw"
    }
}

/// DTW distance between two 1-D or 2-D (`features × time`) series.
pub fn dtw_distance<A, S1, D1, S2, D2>(
    x: &ArrayBase<S1, D1>,
    y: &ArrayBase<S2, D2>,
    window: Option<usize>,
    mode: DtwMode,
) -> Result<A>
where
    A: LibData,
    S1: Data<Elem = A>,
    D1: Dimension,
    S2: Data<Elem = A>,
    D2: Dimension,
{
    let (x, y) = check_arrays(x, y)?;
    Dtw::new(window, mode).distance(x.view(), y.view())
}

/// Cost table evaluated one row at a time. Only the previous row is kept.
fn warp<A: LibData>(x: &Frames<A>, y: &Frames<A>, window: Option<usize>) -> A {
    let (n, m) = (x.len(), y.len());
    if n == 0 || m == 0 {
        debug!("No warping path between series of lengths {} and {}.", n, m);
        return if n == m { A::zero() } else { A::INFINITY };
    }

    let min_window = n.abs_diff(m);
    let window = match window {
        Some(w) if w < min_window => {
            debug!("Widening window {} to the length difference {}.", w, min_window);
            min_window
        }
        Some(w) => w,
        None => n.max(m),
    };

    let mut previous = vec![A::INFINITY; m + 1];
    let mut current = vec![A::INFINITY; m + 1];
    previous[0] = A::zero();

    for i in 1..=n {
        let frame = x.frame(i - 1);
        let start = i.saturating_sub(window).max(1);
        let end = m.min(i.saturating_add(window));

        // cells just outside the band are read by this row and the next one
        current[start - 1] = A::INFINITY;
        for j in start..=end {
            let cost = manhattan(frame, y.frame(j - 1));
            current[j] = cost + previous[j].min(current[j - 1]).min(previous[j - 1]);
        }
        if end < m {
            current[end + 1] = A::INFINITY;
        }

        std::mem::swap(&mut previous, &mut current);
    }

    previous[m]
}

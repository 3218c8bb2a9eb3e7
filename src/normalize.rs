//! Reshaping of raw arrays into the canonical `features × time` layout.

use crate::error::{DistanceError, Result};
use crate::utils::LibData;
use log::trace;
use ndarray::{Array2, ArrayBase, ArrayView2, Axis, Data, Dimension, Ix2};

/// Coerces a 1-D or 2-D array into a `features × time` matrix.
///
/// A 1-D array of length `n` is read as a single feature with `n` time steps.
/// Non-finite values are copied as they are.
pub fn normalize<A, S, D>(series: &ArrayBase<S, D>) -> Result<Array2<A>>
where
    A: LibData,
    S: Data<Elem = A>,
    D: Dimension,
{
    let series = series.view().into_dyn();
    match series.ndim() {
        1 => {
            let n = series.len();
            Array2::from_shape_vec((1, n), series.iter().cloned().collect())
                .map_err(|e| DistanceError::InvalidShape(e.to_string()))
        }
        2 => series
            .into_dimensionality::<Ix2>()
            .map(|s| s.to_owned())
            .map_err(|e| DistanceError::InvalidShape(e.to_string())),
        ndim => Err(DistanceError::InvalidShape(format!(
            "expected a 1-D or 2-D series, got {} dimensions",
            ndim
        ))),
    }
}

/// Normalizes both series and makes sure they share the same number of features.
pub fn check_arrays<A, S1, D1, S2, D2>(
    x: &ArrayBase<S1, D1>,
    y: &ArrayBase<S2, D2>,
) -> Result<(Array2<A>, Array2<A>)>
where
    A: LibData,
    S1: Data<Elem = A>,
    D1: Dimension,
    S2: Data<Elem = A>,
    D2: Dimension,
{
    let x = normalize(x)?;
    let y = normalize(y)?;
    check_features(x.view(), y.view())?;
    trace!("checked series of shapes {:?} and {:?}", x.dim(), y.dim());
    Ok((x, y))
}

pub(crate) fn check_features<A: LibData>(x: ArrayView2<A>, y: ArrayView2<A>) -> Result<()> {
    if x.nrows() != y.nrows() {
        return Err(DistanceError::InvalidShape(format!(
            "series have {} and {} features",
            x.nrows(),
            y.nrows()
        )));
    }
    Ok(())
}

/// Per feature z-score: subtracts each row's mean and divides by its
/// population standard deviation.
///
/// A series without time steps, or a feature whose standard deviation is
/// zero or not finite, is rejected with [`DistanceError::DegenerateInput`].
pub fn standardize<A: LibData>(series: ArrayView2<A>) -> Result<Array2<A>> {
    let mean = series.mean_axis(Axis(1)).ok_or_else(|| {
        DistanceError::DegenerateInput("cannot standardize a series without time steps".into())
    })?;
    let std = series.std_axis(Axis(1), A::zero());

    if let Some(feature) = std.iter().position(|s| !s.is_finite() || *s == A::zero()) {
        return Err(DistanceError::DegenerateInput(format!(
            "feature {} has zero or non-finite standard deviation",
            feature
        )));
    }

    let mean = mean.insert_axis(Axis(1));
    let std = std.insert_axis(Axis(1));
    Ok((&series - &mean) / &std)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::close_l1;
    use ndarray::{arr1, arr2, Array3};

    #[test]
    fn test_normalize_1d() {
        let series = arr1(&[1.0, -1.0, 0.0]);
        let normalized = normalize(&series).unwrap();

        assert_eq!(normalized, arr2(&[[1.0, -1.0, 0.0]]));
    }

    #[test]
    fn test_normalize_2d_keeps_layout() {
        let series = arr2(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        let normalized = normalize(&series).unwrap();

        assert_eq!(normalized.dim(), (3, 2));
        assert_eq!(normalized, series);
    }

    #[test]
    fn test_normalize_rejects_3d() {
        let series: Array3<f64> = Array3::zeros((2, 2, 2));

        assert!(matches!(
            normalize(&series),
            Err(DistanceError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_normalize_passes_non_finite_through() {
        let series = arr1(&[f64::NAN, f64::INFINITY]);
        let normalized = normalize(&series).unwrap();

        assert!(normalized[[0, 0]].is_nan());
        assert!(normalized[[0, 1]].is_infinite());
    }

    #[test]
    fn test_check_arrays_feature_mismatch() {
        let x = arr2(&[[1.0, 2.0], [3.0, 4.0]]);
        let y = arr1(&[1.0, 2.0]);

        assert!(matches!(
            check_arrays(&x, &y),
            Err(DistanceError::InvalidShape(_))
        ));
    }

    #[test]
    fn test_standardize() {
        let series = arr2(&[[1.0f64, -1.0, 0.0, 0.0, 0.0], [2.0, 4.0, 6.0, 8.0, 10.0]]);
        let standardized = standardize(series.view()).unwrap();

        for row in standardized.rows() {
            let mean = row.sum() / 5.0;
            let var = row.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / 5.0;
            close_l1(0.0, mean, 1e-12);
            close_l1(1.0, var, 1e-12);
        }
        close_l1(1.0 / 0.4f64.sqrt(), standardized[[0, 0]], 1e-12);
    }

    #[test]
    fn test_standardize_constant_feature() {
        let series = arr2(&[[1.0, 2.0, 3.0], [5.0, 5.0, 5.0]]);

        assert_eq!(
            standardize(series.view()),
            Err(DistanceError::DegenerateInput(
                "feature 1 has zero or non-finite standard deviation".to_string()
            ))
        );
    }

    #[test]
    fn test_standardize_non_finite_feature() {
        let infinite = arr2(&[[1.0, f64::INFINITY, 2.0]]);
        let missing = arr2(&[[1.0, 2.0, 3.0], [1.0, f64::NAN, 2.0]]);

        assert!(matches!(
            standardize(infinite.view()),
            Err(DistanceError::DegenerateInput(_))
        ));
        assert_eq!(
            standardize(missing.view()),
            Err(DistanceError::DegenerateInput(
                "feature 1 has zero or non-finite standard deviation".to_string()
            ))
        );
    }

    #[test]
    fn test_standardize_empty() {
        let series: Array2<f64> = Array2::zeros((1, 0));

        assert!(matches!(
            standardize(series.view()),
            Err(DistanceError::DegenerateInput(_))
        ));
    }
}

use crate::distance_measure::{dtw, edr, lcss, DtwMode};
use crate::{PairwiseDistance, Parameters};
use ndarray::{Array2, ArrayView2};
use numpy::{IntoPyArray, PyArray2, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

type LibDataType = f64;

fn value_error<E: ToString>(error: E) -> PyErr {
    PyValueError::new_err(error.to_string())
}

#[pyfunction(window = "None", mode = "\"dependent\"")]
fn dtw_distance(
    x: PyReadonlyArrayDyn<LibDataType>,
    y: PyReadonlyArrayDyn<LibDataType>,
    window: Option<usize>,
    mode: &str,
) -> PyResult<LibDataType> {
    let mode: DtwMode = mode.parse().map_err(value_error)?;
    dtw::dtw_distance(&x.as_array(), &y.as_array(), window, mode).map_err(value_error)
}

#[pyfunction]
fn lcss_distance(
    x: PyReadonlyArrayDyn<LibDataType>,
    y: PyReadonlyArrayDyn<LibDataType>,
    delta: LibDataType,
    epsilon: LibDataType,
) -> PyResult<LibDataType> {
    lcss::lcss_distance(&x.as_array(), &y.as_array(), delta, epsilon).map_err(value_error)
}

#[pyfunction]
fn edr_distance(
    x: PyReadonlyArrayDyn<LibDataType>,
    y: PyReadonlyArrayDyn<LibDataType>,
    epsilon: LibDataType,
) -> PyResult<LibDataType> {
    edr::edr_distance(&x.as_array(), &y.as_array(), epsilon).map_err(value_error)
}

#[pyfunction(
    distance_measure = "\"dtw\"",
    n_threads = "None",
    window = "None",
    mode = "\"dependent\"",
    delta = "None",
    epsilon = "None"
)]
fn pairwise_distances<'py>(
    py: Python<'py>,
    data: Vec<PyReadonlyArrayDyn<'py, LibDataType>>,
    distance_measure: String,
    n_threads: Option<usize>,
    window: Option<usize>,
    mode: &str,
    delta: Option<LibDataType>,
    epsilon: Option<LibDataType>,
) -> PyResult<&'py PyArray2<LibDataType>> {
    let parameters = Parameters {
        n_threads,
        distance_measure,
        window,
        mode: mode.parse().map_err(value_error)?,
        delta,
        epsilon,
    };

    let series: Vec<Array2<LibDataType>> = data
        .iter()
        .map(|x| crate::normalize(&x.as_array()))
        .collect::<Result<_, _>>()
        .map_err(value_error)?;
    let views: Vec<ArrayView2<LibDataType>> = series.iter().map(|x| x.view()).collect();

    let matrix = PairwiseDistance::from_parameters(&parameters)
        .and_then(|pairwise| pairwise.pairwise(&views))
        .map_err(value_error)?;

    Ok(matrix.into_pyarray(py))
}

#[pymodule]
fn tsdist_rs(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(dtw_distance, m)?)?;
    m.add_function(wrap_pyfunction!(lcss_distance, m)?)?;
    m.add_function(wrap_pyfunction!(edr_distance, m)?)?;
    m.add_function(wrap_pyfunction!(pairwise_distances, m)?)?;

    Ok(())
}

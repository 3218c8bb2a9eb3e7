use anyhow::Result;
use csv::{ReaderBuilder, Trim};
use ndarray::Array2;
use std::fs::File;
use std::str::FromStr;

/// Reads a csv file with header into a `rows × columns` matrix.
pub fn read_data(file_path: &str) -> Result<Array2<f64>> {
    let file = File::open(file_path)?;
    let mut reader = ReaderBuilder::new().has_headers(true).trim(Trim::All).from_reader(file);

    let n_columns = reader.headers()?.len();
    let mut flat_data = Vec::new();
    for record in reader.records() {
        for value in record?.iter() {
            flat_data.push(f64::from_str(value)?);
        }
    }

    let n_rows = flat_data.len() / n_columns;
    Ok(Array2::from_shape_vec((n_rows, n_columns), flat_data)?)
}

pub fn close_l1(expected: f64, actual: f64, tolerance: f64) {
    assert!(
        (expected - actual).abs() < tolerance,
        "expected {} but got {}",
        expected,
        actual
    );
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

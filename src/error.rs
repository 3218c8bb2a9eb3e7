//! Error type shared by the normalizer and the distance measures.

/// Errors raised before any alignment table is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DistanceError {
    /// Input is not 1-D or 2-D, or the two series disagree on the number of features.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// Unknown mode or measure name, or a negative/NaN threshold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A zero-length series or constant feature where the measure needs variation or length.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

pub type Result<T> = std::result::Result<T, DistanceError>;

use thiserror::Error;

/// Errors produced by the series store and the analytics functions.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeriesError {
    /// A reading below the physical-validity floor was rejected at construction.
    #[error("reading {value} is below the physical floor {floor}")]
    BelowFloor { value: f64, floor: f64 },

    /// An analytics operation was invoked on an empty series.
    #[error("The set is empty!")]
    EmptySeries,
}

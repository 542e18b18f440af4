use std::error::Error;
use std::fmt;

/// Custom error type for array statistics failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    EmptyInput,
    NonFinite(usize), // Number of non-finite values found
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StatsError::EmptyInput => {
                write!(f, "Statistics are undefined for an empty array")
            }
            StatsError::NonFinite(count) => {
                write!(f, "Found {} non-finite values in input array", count)
            }
        }
    }
}

impl Error for StatsError {}

/// Custom error type for matrix operation failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    InvalidDimensions {
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { lhs, rhs } => write!(
                f,
                "Cannot multiply {}x{} by {}x{}: inner dimensions must match",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::InvalidDimensions { rows, cols } => write!(
                f,
                "Matrix dimensions {}x{} exceed the addressable element count",
                rows, cols
            ),
        }
    }
}

impl Error for MatrixError {}

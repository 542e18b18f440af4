//! Numerical operations over arrays and matrices.
//!
//! Provides array statistics (mean, median, population standard deviation),
//! matrix multiplication with explicit shape validation, and uniform random
//! matrix generation with an injectable generator for reproducible output.

use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::error::{MatrixError, StatsError};

/// Aggregates computed over a numeric array.
///
/// Created fresh on every [`array_statistics`] call; carries no identity
/// beyond the call that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrayStatistics {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

/// Compute the mean, median, and population standard deviation of an array.
///
/// The median is the middle element of the sorted values, or the average of
/// the two middle elements for even-length input.
///
/// # Errors
///
/// Returns [`StatsError::EmptyInput`] for an empty array and
/// [`StatsError::NonFinite`] when any element is NaN or infinite; aggregates
/// over such input are undefined and are never silently propagated.
pub fn array_statistics(values: &Array1<f64>) -> Result<ArrayStatistics, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let non_finite = values.iter().filter(|v| !v.is_finite()).count();
    if non_finite > 0 {
        return Err(StatsError::NonFinite(non_finite));
    }

    let mean = values.sum() / values.len() as f64;
    let std_dev = values.iter().population_std_dev();
    let mut ordered = Data::new(values.to_vec());
    let median = ordered.median();

    Ok(ArrayStatistics {
        mean,
        median,
        std_dev,
    })
}

/// Multiply two matrices using standard linear-algebra semantics.
///
/// For A (m×n) and B (n×q) the product is the m×q matrix whose entry
/// [i][j] is the dot product of row i of A and column j of B.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] when the inner dimensions
/// disagree.
pub fn matrix_multiplication(
    left: &Array2<f64>,
    right: &Array2<f64>,
) -> Result<Array2<f64>, MatrixError> {
    if left.ncols() != right.nrows() {
        return Err(MatrixError::DimensionMismatch {
            lhs: left.dim(),
            rhs: right.dim(),
        });
    }
    Ok(left.dot(right))
}

/// Create a rows×cols matrix of independent uniform draws in [0,1).
///
/// Entropy comes from the thread-local generator; use
/// [`create_random_matrix_with`] to inject a seeded generator when
/// reproducible output is needed. `create_random_matrix(0, 0)` succeeds and
/// returns an empty matrix.
pub fn create_random_matrix(rows: usize, cols: usize) -> Result<Array2<f64>, MatrixError> {
    create_random_matrix_with(rows, cols, &mut rand::thread_rng())
}

/// Create a rows×cols matrix of uniform draws from the provided generator.
///
/// # Errors
///
/// Returns [`MatrixError::InvalidDimensions`] when `rows * cols` overflows
/// the addressable element count.
pub fn create_random_matrix_with<R: Rng>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> Result<Array2<f64>, MatrixError> {
    let len = rows
        .checked_mul(cols)
        .ok_or(MatrixError::InvalidDimensions { rows, cols })?;
    let data: Vec<f64> = (0..len).map(|_| rng.gen::<f64>()).collect();
    Ok(Array2::from_shape_vec((rows, cols), data)
        .expect("create_random_matrix_with: shape mismatch"))
}

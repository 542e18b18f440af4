//! Integration tests for the toolbox operations.

use ndarray::{array, Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

use numbox::error::{MatrixError, StatsError};
use numbox::operations::{
    array_statistics, create_random_matrix, create_random_matrix_with, matrix_multiplication,
};

// ---------------------------------------------------------------------------
// array_statistics
// ---------------------------------------------------------------------------

#[test]
fn statistics_odd_length() {
    let stats = array_statistics(&array![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
    assert_eq!(stats.mean, 3.0);
    assert_eq!(stats.median, 3.0);
    // Population standard deviation of 1..=5 is sqrt(2)
    assert!((stats.std_dev - 2.0f64.sqrt()).abs() < 1e-12);
}

#[test]
fn statistics_even_length_median_averages_middle_pair() {
    let stats = array_statistics(&array![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(stats.mean, 2.5);
    assert_eq!(stats.median, 2.5);
    assert!((stats.std_dev - 1.25f64.sqrt()).abs() < 1e-12);
}

#[test]
fn statistics_unsorted_input() {
    let stats = array_statistics(&array![5.0, 1.0, 4.0, 2.0, 3.0]).unwrap();
    assert_eq!(stats.median, 3.0);
}

#[test]
fn statistics_single_element() {
    let stats = array_statistics(&array![42.0]).unwrap();
    assert_eq!(stats.mean, 42.0);
    assert_eq!(stats.median, 42.0);
    assert_eq!(stats.std_dev, 0.0);
}

#[test]
fn statistics_empty_input_errors() {
    let values: Array1<f64> = Array1::from_vec(vec![]);
    let err = array_statistics(&values).unwrap_err();
    assert_eq!(err, StatsError::EmptyInput);
}

#[test]
fn statistics_non_finite_input_errors() {
    let values = array![1.0, f64::NAN, 2.0, f64::INFINITY];
    let err = array_statistics(&values).unwrap_err();
    assert_eq!(err, StatsError::NonFinite(2));
}

#[test]
fn statistics_serialize_to_json() {
    let stats = array_statistics(&array![1.0, 2.0, 3.0]).unwrap();
    let json = serde_json::to_string(&stats).unwrap();
    assert!(json.contains("mean"));
    assert!(json.contains("median"));
    assert!(json.contains("std_dev"));
}

// ---------------------------------------------------------------------------
// matrix_multiplication
// ---------------------------------------------------------------------------

#[test]
fn matmul_worked_example() {
    let a = array![[1.0, 2.0], [3.0, 4.0]];
    let b = array![[5.0, 6.0], [7.0, 8.0]];
    let product = matrix_multiplication(&a, &b).unwrap();
    assert_eq!(product, array![[19.0, 22.0], [43.0, 50.0]]);
}

#[test]
fn matmul_result_shape() {
    let a = Array2::<f64>::zeros((3, 2));
    let b = Array2::<f64>::zeros((2, 4));
    let product = matrix_multiplication(&a, &b).unwrap();
    assert_eq!(product.dim(), (3, 4));
}

#[test]
fn matmul_inner_dimension_mismatch_errors() {
    let a = Array2::<f64>::zeros((3, 2));
    let b = Array2::<f64>::zeros((3, 4));
    let err = matrix_multiplication(&a, &b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            lhs: (3, 2),
            rhs: (3, 4),
        }
    );
}

#[test]
fn matmul_is_not_elementwise() {
    // A 1x2 by 2x1 product collapses to a single dot product
    let a = array![[2.0, 3.0]];
    let b = array![[4.0], [5.0]];
    let product = matrix_multiplication(&a, &b).unwrap();
    assert_eq!(product, array![[23.0]]);
}

// ---------------------------------------------------------------------------
// create_random_matrix
// ---------------------------------------------------------------------------

#[test]
fn random_matrix_shape_and_range() {
    let matrix = create_random_matrix(4, 3).unwrap();
    assert_eq!(matrix.dim(), (4, 3));
    for v in matrix.iter() {
        assert!(*v >= 0.0, "value below uniform range: {}", v);
        assert!(*v < 1.0, "value outside uniform range: {}", v);
    }
}

#[test]
fn random_matrix_zero_by_zero_is_empty() {
    let matrix = create_random_matrix(0, 0).unwrap();
    assert_eq!(matrix.dim(), (0, 0));
}

#[test]
fn random_matrix_seeded_is_reproducible() {
    let mut rng1 = StdRng::seed_from_u64(42);
    let mut rng2 = StdRng::seed_from_u64(42);
    let a = create_random_matrix_with(5, 2, &mut rng1).unwrap();
    let b = create_random_matrix_with(5, 2, &mut rng2).unwrap();
    assert_eq!(a, b);
}

#[test]
fn random_matrix_overflowing_dimensions_error() {
    let err = create_random_matrix(usize::MAX, 2).unwrap_err();
    assert_eq!(
        err,
        MatrixError::InvalidDimensions {
            rows: usize::MAX,
            cols: 2,
        }
    );
}

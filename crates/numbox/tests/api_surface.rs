//! Integration tests for the crate-root export surface and the deprecation shim.

use ndarray::array;

// ---------------------------------------------------------------------------
// Selective re-export
// ---------------------------------------------------------------------------

#[test]
fn promoted_functions_resolve_at_crate_root() {
    let stats = numbox::array_statistics(&array![1.0, 2.0, 3.0]).unwrap();
    assert_eq!(stats.median, 2.0);

    let product = numbox::matrix_multiplication(&array![[1.0]], &array![[2.0]]).unwrap();
    assert_eq!(product, array![[2.0]]);
}

#[test]
fn random_matrix_requires_qualified_access() {
    // Not promoted to the crate root; the module path is the only way in.
    let matrix = numbox::operations::create_random_matrix(2, 2).unwrap();
    assert_eq!(matrix.dim(), (2, 2));
}

// ---------------------------------------------------------------------------
// Deprecation shim
// ---------------------------------------------------------------------------

// All describe() calls live in this one test so notice draining never races
// with another test in this binary.
#[test]
fn deprecated_describe_records_notices_and_keeps_legacy_output() {
    let _ = numbox::compat::take_notices();

    #[allow(deprecated)]
    let summary = numbox::compat::describe(&array![1.0, 2.0, 3.0, 4.0, 5.0]);
    let notices = numbox::compat::take_notices();
    assert_eq!(notices.len(), 1, "one call must record exactly one notice");
    assert_eq!(notices[0].function, "describe");
    assert_eq!(notices[0].replacement, "array_statistics");
    assert_eq!(summary, "n=5 mean=3.0000 std_dev=1.4142");

    #[allow(deprecated)]
    let empty = numbox::compat::describe(&ndarray::Array1::from_vec(vec![]));
    assert_eq!(empty, "n=0");
    assert_eq!(numbox::compat::take_notices().len(), 1);
}

//! numbox: a toolbox for numerical array and matrix operations.
//!
//! The crate wraps [`ndarray`] for array storage and linear algebra, `statrs`
//! for order statistics, and `rand` for random matrix generation. All
//! operations are pure functions over caller-owned arrays; nothing is cached
//! between calls.
//!
//! # Public surface
//!
//! The crate root promotes a deliberate subset of [`operations`]:
//! [`array_statistics`] and [`matrix_multiplication`] are re-exported here,
//! while `create_random_matrix` must be reached through the module path
//! (`numbox::operations::create_random_matrix`). The legacy
//! [`compat::describe`] function is likewise callable only through its
//! module and is excluded from the promoted set.
//!
//! ```
//! use ndarray::array;
//! use numbox::{array_statistics, matrix_multiplication};
//!
//! let stats = array_statistics(&array![1.0, 2.0, 3.0, 4.0, 5.0])?;
//! assert_eq!(stats.mean, 3.0);
//!
//! let product = matrix_multiplication(
//!     &array![[1.0, 2.0], [3.0, 4.0]],
//!     &array![[5.0, 6.0], [7.0, 8.0]],
//! )?;
//! assert_eq!(product, array![[19.0, 22.0], [43.0, 50.0]]);
//!
//! // Random matrix generation requires the qualified path:
//! let noise = numbox::operations::create_random_matrix(2, 3)?;
//! assert_eq!(noise.dim(), (2, 3));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod compat;
pub mod error;
pub mod operations;

pub use operations::{array_statistics, matrix_multiplication};

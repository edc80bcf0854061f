//! # Shared data structures
//!
//! Small linear algebra utilities used by the reference engine and the exchange of sparse
//! rows and columns with any engine.
pub mod matrix;

/// Sparse representation of a row or column: `(index, value)` tuples with strictly increasing
/// indices and nonzero values.
pub type SparseTuples = Vec<(usize, f64)>;

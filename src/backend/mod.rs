//! # The engine contract
//!
//! The dictionary delegates all numerical work to an engine holding the live tableau. This module
//! specifies the capabilities such an engine needs to offer; the `dense` submodule provides an
//! in-memory implementation.
//!
//! ## Combined numbering
//!
//! Engines number their variables row-first: combined indices in `[0, nr_rows)` denote auxiliary
//! (row) variables, indices in `[nr_rows, nr_rows + nr_columns)` denote structural (column)
//! variables. The auxiliary variable of a row is the row's value itself, not its slack; the
//! dictionary layer is responsible for the translation between the two conventions.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

use enum_map::Enum;

use crate::data::SparseTuples;

pub mod dense;

/// Basis status of a single row or column.
///
/// Exactly one variable per row is `Basic`; all others are held at a bound or, for variables
/// without any bound, at zero.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Enum, Eq, PartialEq, Hash)]
pub enum BasisStatus {
    Basic,
    NonbasicLower,
    NonbasicUpper,
    Free,
}

/// An engine maintaining a simplex tableau for a linear program.
///
/// The tableau convention is `x_B = Xi x_N` with `Xi = -B^-1 N` over the combined system
/// `(I | -A) x = 0`, `x = (x_aux, x_struct)`. Row and column counts may change over the lifetime
/// of the engine; callers should read them live.
pub trait Backend {
    /// Number of structural variables (columns).
    fn nr_columns(&self) -> usize;
    /// Number of constraint rows.
    fn nr_rows(&self) -> usize;

    /// Lower and upper bound of constraint row `i`.
    fn row_bounds(&self, i: usize) -> (Option<f64>, Option<f64>);
    /// Lower bound of structural variable `j`.
    fn column_lower_bound(&self, j: usize) -> Option<f64>;

    /// Human-readable label of structural variable `j`, if any.
    fn column_name(&self, j: usize) -> Option<&str>;
    /// Human-readable label of constraint row `i`, if any.
    fn row_name(&self, i: usize) -> Option<&str>;

    /// Basis status of structural variable `j`.
    fn column_status(&self, j: usize) -> BasisStatus;
    /// Overwrite the basis status of structural variable `j`.
    ///
    /// Derived quantities (values, duals, the tableau) are stale until the next `warm_up`.
    fn set_column_status(&mut self, j: usize, status: BasisStatus);
    /// Basis status of constraint row `i`.
    fn row_status(&self, i: usize) -> BasisStatus;
    /// Overwrite the basis status of constraint row `i`.
    fn set_row_status(&mut self, i: usize, status: BasisStatus);

    /// Tableau column of the nonbasic variable with combined index `k`.
    ///
    /// # Return value
    ///
    /// Sparse `(position, value)` tuples with ascending positions, where each position is the
    /// combined index of a basic variable. Positions not listed carry a zero coefficient.
    fn tableau_column(&self, k: usize) -> SparseTuples;
    /// Tableau row of the basic variable with combined index `k`.
    ///
    /// # Return value
    ///
    /// Sparse `(position, value)` tuples with ascending positions, where each position is the
    /// combined index of a nonbasic variable.
    fn tableau_row(&self, k: usize) -> SparseTuples;

    /// Current value of structural variable `j`.
    fn column_value(&self, j: usize) -> f64;
    /// Current value of constraint row `i` (the value of its auxiliary variable).
    fn row_value(&self, i: usize) -> f64;
    /// Reduced cost of structural variable `j`.
    fn column_dual(&self, j: usize) -> f64;
    /// Reduced cost of the auxiliary variable of row `i`.
    fn row_dual(&self, i: usize) -> f64;
    /// Current objective value.
    fn objective_value(&self) -> f64;

    /// Recompute the factorization and all derived values from the current basis statuses.
    ///
    /// This is not a solve; the basis is taken as given. Fails when the statuses don't describe
    /// a valid basis.
    fn warm_up(&mut self) -> Result<(), WarmUpError>;

    /// Append a constraint row.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: Sparse structural coefficients of the new row.
    /// * `lower`, `upper`: Row bounds.
    /// * `name`: Optional row label.
    fn add_constraint_row(
        &mut self,
        coefficients: &SparseTuples,
        lower: Option<f64>,
        upper: Option<f64>,
        name: Option<&str>,
    );
}

/// A `WarmUpError` is created when an engine can not rebuild its tableau from the current basis
/// status assignment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WarmUpError {
    /// The number of variables flagged basic differs from the number of rows.
    BasisSize {
        /// Number of rows of the problem.
        expected: usize,
        /// Number of variables flagged basic.
        actual: usize,
    },
    /// The flagged variables do not form an invertible basis matrix.
    SingularBasis,
}

impl Display for WarmUpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BasisSize { expected, actual } => write!(
                f, "{} variables are flagged basic while the problem has {} rows", actual, expected,
            ),
            Self::SingularBasis => write!(f, "the flagged variables form a singular basis matrix"),
        }
    }
}

impl Error for WarmUpError {}

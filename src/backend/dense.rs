//! # A dense in-memory engine
//!
//! Reference implementation of the `Backend` trait. It keeps the problem data in dense form and
//! maintains a basis inverse which is recomputed from scratch on every `warm_up` call; there is
//! no factorization update. That keeps it far from production strength, but it is exact about
//! the contract and convenient to drive programmatically.
use itertools::Itertools;
use num_traits::Zero;

use crate::backend::{Backend, BasisStatus, WarmUpError};
use crate::data::matrix::SquareMatrix;
use crate::data::SparseTuples;

/// A structural variable of the problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    /// Objective coefficient.
    pub cost: f64,
    /// Lower bound, typically `Some(0.0)`.
    pub lower_bound: Option<f64>,
    /// Upper bound.
    pub upper_bound: Option<f64>,
    /// Optional human-readable label.
    pub name: Option<String>,
}

/// A constraint row of the problem.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Sparse structural coefficients with ascending column indices.
    pub coefficients: SparseTuples,
    /// Lower bound of the row value.
    pub lower_bound: Option<f64>,
    /// Upper bound of the row value.
    pub upper_bound: Option<f64>,
    /// Optional human-readable label.
    pub name: Option<String>,
}

/// Values derived from the problem data and a basis status assignment.
///
/// Rebuilt as a whole by `warm_up`; stale after any status change or row extension until then.
#[derive(Clone, Debug, PartialEq)]
struct EngineState {
    /// Combined indices of the basic variables, ascending. One per basis row.
    basis: Vec<usize>,
    /// Inverse of the matrix of combined columns of the basic variables.
    basis_inverse: SquareMatrix,
    /// Primal value per combined variable.
    values: Vec<f64>,
    /// Reduced cost per combined variable; zero for basic ones.
    reduced_costs: Vec<f64>,
    /// Objective value of the current solution.
    objective_value: f64,
}

/// Engine holding the problem in dense form.
///
/// A fresh engine starts from the slack basis: all rows basic, all columns nonbasic at their
/// lower bound.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseBackend {
    columns: Vec<Column>,
    rows: Vec<Row>,
    column_statuses: Vec<BasisStatus>,
    row_statuses: Vec<BasisStatus>,
    state: EngineState,
}

impl DenseBackend {
    /// Create an engine loaded with the given problem, at the slack basis.
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        let column_statuses = vec![BasisStatus::NonbasicLower; columns.len()];
        let row_statuses = vec![BasisStatus::Basic; rows.len()];
        let state = EngineState::slack_basis(&columns, &rows);

        Self { columns, rows, column_statuses, row_statuses, state }
    }

    /// Sparse structural coefficients of row `i`.
    pub fn row_coefficients(&self, i: usize) -> &SparseTuples {
        debug_assert!(i < self.rows.len());

        &self.rows[i].coefficients
    }

    /// Column `k` of the combined system `(I | -A)`, as a dense vector of length `nr_rows`.
    fn combined_column(&self, k: usize) -> Vec<f64> {
        let nr_rows = self.rows.len();
        debug_assert!(k < nr_rows + self.columns.len());

        let mut column = vec![0_f64; nr_rows];
        if k < nr_rows {
            column[k] = 1_f64;
        } else {
            let j = k - nr_rows;
            for (i, row) in self.rows.iter().enumerate() {
                for &(column_index, value) in &row.coefficients {
                    if column_index == j {
                        column[i] = -value;
                    }
                }
            }
        }

        column
    }

    /// Objective coefficient of the combined variable `k`; auxiliary variables cost nothing.
    fn combined_cost(&self, k: usize) -> f64 {
        if k < self.rows.len() { 0_f64 } else { self.columns[k - self.rows.len()].cost }
    }

    /// Value at which the nonbasic combined variable `k` is currently held.
    fn nonbasic_value(&self, k: usize) -> f64 {
        let nr_rows = self.rows.len();
        let (status, lower, upper) = if k < nr_rows {
            (self.row_statuses[k], self.rows[k].lower_bound, self.rows[k].upper_bound)
        } else {
            let column = &self.columns[k - nr_rows];
            (self.column_statuses[k - nr_rows], column.lower_bound, column.upper_bound)
        };

        match status {
            BasisStatus::NonbasicLower => lower.unwrap_or(0_f64),
            BasisStatus::NonbasicUpper => upper.unwrap_or(0_f64),
            BasisStatus::Free => 0_f64,
            BasisStatus::Basic => {
                debug_assert!(false, "combined variable {} is basic", k);
                0_f64
            },
        }
    }

    /// Rebuild the derived state from the problem data and the current statuses.
    fn derive_state(&self) -> Result<EngineState, WarmUpError> {
        let nr_rows = self.rows.len();
        let nr_combined = nr_rows + self.columns.len();

        let basis = self.row_statuses.iter()
            .positions(|&status| status == BasisStatus::Basic)
            .chain(
                self.column_statuses.iter()
                    .positions(|&status| status == BasisStatus::Basic)
                    .map(|j| nr_rows + j),
            )
            .collect::<Vec<_>>();
        if basis.len() != nr_rows {
            return Err(WarmUpError::BasisSize { expected: nr_rows, actual: basis.len() });
        }

        let basis_columns = basis.iter().map(|&k| self.combined_column(k)).collect::<Vec<_>>();
        let basis_inverse = SquareMatrix::from_columns(&basis_columns)
            .inverse()
            .ok_or(WarmUpError::SingularBasis)?;

        // Nonbasic variables sit at their bound; the basic ones balance the combined system.
        let mut values = vec![0_f64; nr_combined];
        let mut right_hand_side = vec![0_f64; nr_rows];
        for k in 0..nr_combined {
            if basis.binary_search(&k).is_ok() {
                continue;
            }
            let value = self.nonbasic_value(k);
            values[k] = value;
            if !value.is_zero() {
                for (i, coefficient) in self.combined_column(k).into_iter().enumerate() {
                    right_hand_side[i] -= coefficient * value;
                }
            }
        }
        let basic_values = basis_inverse.multiply_vector(&right_hand_side);
        for (row, &k) in basis.iter().enumerate() {
            values[k] = basic_values[row];
        }

        // Simplex multipliers y = B^-T c_B, then reduced costs d = c - y A per nonbasic variable.
        let multipliers = (0..nr_rows)
            .map(|i| {
                (0..nr_rows)
                    .map(|row| basis_inverse.get_value(row, i) * self.combined_cost(basis[row]))
                    .sum::<f64>()
            })
            .collect::<Vec<_>>();
        let mut reduced_costs = vec![0_f64; nr_combined];
        for k in 0..nr_combined {
            if basis.binary_search(&k).is_ok() {
                continue;
            }
            let weighted = multipliers.iter().zip(self.combined_column(k))
                .map(|(multiplier, coefficient)| multiplier * coefficient)
                .sum::<f64>();
            reduced_costs[k] = self.combined_cost(k) - weighted;
        }

        let objective_value = self.columns.iter().enumerate()
            .map(|(j, column)| column.cost * values[nr_rows + j])
            .sum();

        Ok(EngineState { basis, basis_inverse, values, reduced_costs, objective_value })
    }
}

impl EngineState {
    /// State of the slack basis: `B` is the identity on the auxiliary variables.
    fn slack_basis(columns: &[Column], rows: &[Row]) -> Self {
        let nr_rows = rows.len();

        let mut values = vec![0_f64; nr_rows + columns.len()];
        for (j, column) in columns.iter().enumerate() {
            values[nr_rows + j] = column.lower_bound.unwrap_or(0_f64);
        }
        for (i, row) in rows.iter().enumerate() {
            values[i] = row.coefficients.iter()
                .map(|&(j, coefficient)| coefficient * values[nr_rows + j])
                .sum();
        }

        // With zero cost on every basic (auxiliary) variable, the multipliers vanish and each
        // reduced cost equals the original cost.
        let mut reduced_costs = vec![0_f64; nr_rows + columns.len()];
        for (j, column) in columns.iter().enumerate() {
            reduced_costs[nr_rows + j] = column.cost;
        }

        let objective_value = columns.iter().enumerate()
            .map(|(j, column)| column.cost * values[nr_rows + j])
            .sum();

        Self {
            basis: (0..nr_rows).collect(),
            basis_inverse: SquareMatrix::identity(nr_rows),
            values,
            reduced_costs,
            objective_value,
        }
    }
}

impl Backend for DenseBackend {
    fn nr_columns(&self) -> usize {
        self.columns.len()
    }

    fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    fn row_bounds(&self, i: usize) -> (Option<f64>, Option<f64>) {
        debug_assert!(i < self.rows.len());

        (self.rows[i].lower_bound, self.rows[i].upper_bound)
    }

    fn column_lower_bound(&self, j: usize) -> Option<f64> {
        debug_assert!(j < self.columns.len());

        self.columns[j].lower_bound
    }

    fn column_name(&self, j: usize) -> Option<&str> {
        debug_assert!(j < self.columns.len());

        self.columns[j].name.as_deref()
    }

    fn row_name(&self, i: usize) -> Option<&str> {
        debug_assert!(i < self.rows.len());

        self.rows[i].name.as_deref()
    }

    fn column_status(&self, j: usize) -> BasisStatus {
        self.column_statuses[j]
    }

    fn set_column_status(&mut self, j: usize, status: BasisStatus) {
        self.column_statuses[j] = status;
    }

    fn row_status(&self, i: usize) -> BasisStatus {
        self.row_statuses[i]
    }

    fn set_row_status(&mut self, i: usize, status: BasisStatus) {
        self.row_statuses[i] = status;
    }

    fn tableau_column(&self, k: usize) -> SparseTuples {
        debug_assert!(self.state.basis.binary_search(&k).is_err());

        self.state.basis_inverse.multiply_vector(&self.combined_column(k)).into_iter()
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .map(|(row, value)| (self.state.basis[row], -value))
            .collect()
    }

    fn tableau_row(&self, k: usize) -> SparseTuples {
        let Ok(row) = self.state.basis.binary_search(&k) else {
            debug_assert!(false, "combined variable {} is not basic", k);
            return Vec::new();
        };

        (0..(self.rows.len() + self.columns.len()))
            .filter(|combined| self.state.basis.binary_search(combined).is_err())
            .filter_map(|combined| {
                let value = -self.state.basis_inverse.row(row)
                    .zip(self.combined_column(combined))
                    .map(|(coefficient, column_value)| coefficient * column_value)
                    .sum::<f64>();
                (!value.is_zero()).then_some((combined, value))
            })
            .collect()
    }

    fn column_value(&self, j: usize) -> f64 {
        self.state.values[self.rows.len() + j]
    }

    fn row_value(&self, i: usize) -> f64 {
        self.state.values[i]
    }

    fn column_dual(&self, j: usize) -> f64 {
        self.state.reduced_costs[self.rows.len() + j]
    }

    fn row_dual(&self, i: usize) -> f64 {
        self.state.reduced_costs[i]
    }

    fn objective_value(&self) -> f64 {
        self.state.objective_value
    }

    fn warm_up(&mut self) -> Result<(), WarmUpError> {
        self.state = self.derive_state()?;

        Ok(())
    }

    fn add_constraint_row(
        &mut self,
        coefficients: &SparseTuples,
        lower: Option<f64>,
        upper: Option<f64>,
        name: Option<&str>,
    ) {
        debug_assert!(coefficients.iter().all(|&(j, _)| j < self.columns.len()));

        self.rows.push(Row {
            coefficients: coefficients.clone(),
            lower_bound: lower,
            upper_bound: upper,
            name: name.map(str::to_string),
        });
        // The fresh row enters the basis, so a plain warm up restores consistency.
        self.row_statuses.push(BasisStatus::Basic);
        if let Ok(state) = self.derive_state() {
            self.state = state;
        }
    }
}

//! # The dictionary
//!
//! A live, symbolic view of the basis of a linear program held by an engine. The dictionary owns
//! the variable catalogue and borrows the engine; every basis query is recomputed against the
//! engine on the spot, because the engine's state changes underneath the dictionary.
//!
//! The engine works on row values directly, while a dictionary's auxiliary variable is the slack
//! `upper bound - row value`. Every tableau value read from the engine therefore needs a sign
//! flip exactly when its position lies in row space; see `signed`.
use std::collections::{HashMap, HashSet};

use enum_map::{EnumMap, enum_map};
use num_traits::Zero;

use crate::backend::{Backend, BasisStatus};
use crate::data::SparseTuples;
use crate::dictionary::error::{DictionaryError, Selection};
use crate::dictionary::variable::{
    Variable, VariableKind, synthesized_column_name, synthesized_row_name,
};

pub mod error;
pub mod variable;

/// Sign normalization for tableau values.
///
/// Keyed purely on whether the tableau position lies in row space, never on which variable was
/// requested: an auxiliary variable represents `upper bound - value` rather than the value
/// itself, so its coefficients appear negated in the engine's convention.
fn signed(nr_rows: usize, position: usize, value: f64) -> f64 {
    if position < nr_rows { -value } else { value }
}

/// A symbolic basic/nonbasic view of the basis held by an engine.
///
/// Holds the ordered variable catalogue and an optional pending entering/leaving selection. The
/// selection alone has zero effect on the engine; only a committed `update` mutates it.
#[derive(Debug)]
pub struct Dictionary<'engine, B: Backend> {
    backend: &'engine mut B,
    /// All variables: structural ones first in column order, then auxiliary ones in row order.
    variables: Vec<Variable>,
    /// Catalogue index of the nonbasic variable chosen to become basic.
    entering: Option<usize>,
    /// Catalogue index of the basic variable chosen to become nonbasic.
    leaving: Option<usize>,
}

impl<'engine, B: Backend> Dictionary<'engine, B> {
    /// Create a dictionary over the engine's current problem.
    ///
    /// # Errors
    ///
    /// `StandardFormViolation` when a constraint row is not a pure upper bounded inequality or a
    /// structural variable lacks a finite lower bound; `NameConflict` when the engine labels two
    /// variables identically.
    pub fn new(backend: &'engine mut B) -> Result<Self, DictionaryError> {
        let (nr_rows, nr_columns) = (backend.nr_rows(), backend.nr_columns());

        for i in 0..nr_rows {
            match backend.row_bounds(i) {
                (None, Some(upper)) if upper.is_finite() => {},
                _ => return Err(DictionaryError::StandardFormViolation(format!(
                    "row {} is not a pure upper bounded inequality", i,
                ))),
            }
        }
        for j in 0..nr_columns {
            match backend.column_lower_bound(j) {
                Some(bound) if bound.is_finite() => {},
                _ => return Err(DictionaryError::StandardFormViolation(format!(
                    "structural variable {} has no finite lower bound", j,
                ))),
            }
        }

        let mut variables = Vec::with_capacity(nr_columns + nr_rows);
        for j in 0..nr_columns {
            let name = backend.column_name(j)
                .map_or_else(|| synthesized_column_name(j), str::to_string);
            variables.push(Variable::new(name, j, VariableKind::Structural));
        }
        for i in 0..nr_rows {
            let name = backend.row_name(i)
                .map_or_else(|| synthesized_row_name(i), str::to_string);
            variables.push(Variable::new(name, nr_columns + i, VariableKind::Auxiliary));
        }

        let mut seen = HashSet::with_capacity(variables.len());
        for variable in &variables {
            if !seen.insert(variable.name()) {
                return Err(DictionaryError::NameConflict(variable.name().to_string()));
            }
        }

        Ok(Self { backend, variables, entering: None, leaving: None })
    }

    /// Number of constraint rows, read live from the engine.
    pub fn nr_rows(&self) -> usize {
        self.backend.nr_rows()
    }

    /// Number of structural variables, read live from the engine.
    pub fn nr_columns(&self) -> usize {
        self.backend.nr_columns()
    }

    /// All variables in catalogue order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Shared access to the engine.
    pub fn backend(&self) -> &B {
        self.backend
    }

    /// Exclusive access to the engine, for re-optimization after a row extension.
    ///
    /// The engine's basis statuses should not be altered through this handle while selections
    /// are pending; the dictionary holds no copy of them, but a pending selection may silently
    /// change meaning.
    pub fn backend_mut(&mut self) -> &mut B {
        self.backend
    }

    /// Whether the variable at catalogue index `index` is currently basic.
    fn is_basic(&self, index: usize) -> bool {
        let status = match self.variables[index].kind() {
            VariableKind::Structural => self.backend.column_status(index),
            VariableKind::Auxiliary => self.backend.row_status(index - self.backend.nr_columns()),
        };

        status == BasisStatus::Basic
    }

    /// Engine index in combined row-first numbering of the variable at catalogue index `index`.
    fn combined_index(&self, index: usize) -> usize {
        match self.variables[index].kind() {
            VariableKind::Structural => self.backend.nr_rows() + index,
            VariableKind::Auxiliary => index - self.backend.nr_columns(),
        }
    }

    /// Catalogue indices of the basic variables, in index order.
    fn basic_indices(&self) -> Vec<usize> {
        (0..self.variables.len()).filter(|&index| self.is_basic(index)).collect()
    }

    /// Catalogue indices of the nonbasic variables, in index order.
    fn nonbasic_indices(&self) -> Vec<usize> {
        (0..self.variables.len()).filter(|&index| !self.is_basic(index)).collect()
    }

    /// The basic variables, in catalogue order: columns first, then rows.
    ///
    /// There is exactly one basic variable per constraint row.
    pub fn basic_variables(&self) -> Vec<&Variable> {
        self.basic_indices().into_iter().map(|index| &self.variables[index]).collect()
    }

    /// The nonbasic variables, in catalogue order.
    pub fn nonbasic_variables(&self) -> Vec<&Variable> {
        self.nonbasic_indices().into_iter().map(|index| &self.variables[index]).collect()
    }

    /// Constant term of each basic variable's expansion, ordered as `basic_variables`.
    ///
    /// For a structural variable this is its current value; for an auxiliary variable the slack
    /// amount `row upper bound - current row value`.
    pub fn constant_terms(&self) -> Vec<f64> {
        let nr_columns = self.backend.nr_columns();

        self.basic_indices().into_iter()
            .map(|index| match self.variables[index].kind() {
                VariableKind::Structural => self.backend.column_value(index),
                VariableKind::Auxiliary => {
                    let row = index - nr_columns;
                    let (_, upper) = self.backend.row_bounds(row);
                    debug_assert!(upper.is_some());
                    upper.unwrap_or(0_f64) - self.backend.row_value(row)
                },
            })
            .collect()
    }

    /// Objective coefficient of each nonbasic variable, ordered as `nonbasic_variables`.
    ///
    /// The reduced cost for a structural variable, the negated row dual for an auxiliary one.
    pub fn objective_coefficients(&self) -> Vec<f64> {
        let nr_columns = self.backend.nr_columns();

        self.nonbasic_indices().into_iter()
            .map(|index| match self.variables[index].kind() {
                VariableKind::Structural => self.backend.column_dual(index),
                VariableKind::Auxiliary => -self.backend.row_dual(index - nr_columns),
            })
            .collect()
    }

    /// The engine's current objective value, unmodified.
    pub fn objective_value(&self) -> f64 {
        self.backend.objective_value()
    }

    /// Tally of the engine's basis statuses over all rows and columns.
    ///
    /// In a consistent state the `Basic` count equals the number of rows.
    pub fn basis_status_counts(&self) -> EnumMap<BasisStatus, usize> {
        let mut counts = enum_map! { _ => 0 };
        for j in 0..self.backend.nr_columns() {
            counts[self.backend.column_status(j)] += 1;
        }
        for i in 0..self.backend.nr_rows() {
            counts[self.backend.row_status(i)] += 1;
        }

        counts
    }

    /// Select the nonbasic variable at catalogue index `index` to become basic.
    ///
    /// Selecting has zero effect on the engine until `update` commits the exchange. A previous
    /// entering selection is replaced.
    ///
    /// # Errors
    ///
    /// `InvalidSelection` when the variable is currently basic.
    pub fn set_entering(&mut self, index: usize) -> Result<(), DictionaryError> {
        debug_assert!(index < self.variables.len());

        if self.is_basic(index) {
            return Err(DictionaryError::InvalidSelection(format!(
                "entering variable {} is already basic", self.variables[index],
            )));
        }
        self.entering = Some(index);

        Ok(())
    }

    /// Select the basic variable at catalogue index `index` to become nonbasic.
    ///
    /// # Errors
    ///
    /// `InvalidSelection` when the variable is currently nonbasic.
    pub fn set_leaving(&mut self, index: usize) -> Result<(), DictionaryError> {
        debug_assert!(index < self.variables.len());

        if !self.is_basic(index) {
            return Err(DictionaryError::InvalidSelection(format!(
                "leaving variable {} is not basic", self.variables[index],
            )));
        }
        self.leaving = Some(index);

        Ok(())
    }

    /// The pending entering variable, if any.
    pub fn entering(&self) -> Option<&Variable> {
        self.entering.map(|index| &self.variables[index])
    }

    /// The pending leaving variable, if any.
    pub fn leaving(&self) -> Option<&Variable> {
        self.leaving.map(|index| &self.variables[index])
    }

    /// Drop both pending selections without touching the engine.
    pub fn clear_selection(&mut self) {
        self.entering = None;
        self.leaving = None;
    }

    /// Coefficients of the entering variable's column, ordered as `basic_variables`.
    ///
    /// Entry `k` is the coefficient multiplying `basic_variables()[k]` in the entering column's
    /// expansion.
    ///
    /// # Errors
    ///
    /// `MissingSelection` when no entering variable is set.
    pub fn entering_coefficients(&self) -> Result<Vec<f64>, DictionaryError> {
        let entering = self.entering.ok_or(DictionaryError::MissingSelection(Selection::Entering))?;

        Ok(self.scatter(
            self.backend.tableau_column(self.combined_index(entering)),
            &self.basic_indices(),
        ))
    }

    /// Coefficients of the leaving variable's row, ordered as `nonbasic_variables`.
    ///
    /// # Errors
    ///
    /// `MissingSelection` when no leaving variable is set.
    pub fn leaving_coefficients(&self) -> Result<Vec<f64>, DictionaryError> {
        let leaving = self.leaving.ok_or(DictionaryError::MissingSelection(Selection::Leaving))?;

        Ok(self.scatter(
            self.backend.tableau_row(self.combined_index(leaving)),
            &self.nonbasic_indices(),
        ))
    }

    /// Scatter sparse tableau values into a dense vector ordered by the given catalogue indices,
    /// normalizing signs along the way.
    fn scatter(&self, tuples: SparseTuples, ordered_indices: &[usize]) -> Vec<f64> {
        let nr_rows = self.backend.nr_rows();
        let rank = ordered_indices.iter()
            .enumerate()
            .map(|(rank, &index)| (self.combined_index(index), rank))
            .collect::<HashMap<_, _>>();

        let mut coefficients = vec![0_f64; ordered_indices.len()];
        for (position, value) in tuples {
            debug_assert!(rank.contains_key(&position));
            if let Some(&rank) = rank.get(&position) {
                coefficients[rank] = signed(nr_rows, position, value);
            }
        }

        coefficients
    }

    /// Commit the pending basis exchange.
    ///
    /// The entering variable becomes basic; the leaving variable is moved to the bound matching
    /// its kind: the slack of an upper bounded row leaves towards the row's upper bound, a
    /// structural variable towards its lower bound. The engine then rebuilds its tableau by a
    /// warm start. On success both selections are cleared.
    ///
    /// # Errors
    ///
    /// `MissingSelection` when either selection is unset, `IncompatiblePivot` when the pair's
    /// pivot coefficient is zero (the engine is left untouched and the selections remain), and
    /// `WarmStartFailure` when the engine's recomputation fails, which signals basis corruption.
    pub fn update(&mut self) -> Result<(), DictionaryError> {
        let entering = self.entering.ok_or(DictionaryError::MissingSelection(Selection::Entering))?;
        let leaving = self.leaving.ok_or(DictionaryError::MissingSelection(Selection::Leaving))?;

        let position = self.basic_indices().into_iter().position(|index| index == leaving)
            .ok_or_else(|| DictionaryError::InvalidSelection(format!(
                "leaving variable {} is not basic", self.variables[leaving],
            )))?;
        if self.entering_coefficients()?[position].is_zero() {
            return Err(DictionaryError::IncompatiblePivot);
        }

        let nr_columns = self.backend.nr_columns();
        match self.variables[entering].kind() {
            VariableKind::Structural => {
                self.backend.set_column_status(entering, BasisStatus::Basic)
            },
            VariableKind::Auxiliary => {
                self.backend.set_row_status(entering - nr_columns, BasisStatus::Basic)
            },
        }
        match self.variables[leaving].kind() {
            VariableKind::Structural => {
                self.backend.set_column_status(leaving, BasisStatus::NonbasicLower)
            },
            VariableKind::Auxiliary => {
                self.backend.set_row_status(leaving - nr_columns, BasisStatus::NonbasicUpper)
            },
        }

        self.backend.warm_up().map_err(DictionaryError::WarmStartFailure)?;
        debug_assert_eq!(self.basis_status_counts()[BasisStatus::Basic], self.backend.nr_rows());

        self.entering = None;
        self.leaving = None;

        Ok(())
    }

    /// Append the constraint `<coefficients, x> <= constant` and its slack variable.
    ///
    /// Only nonzero coefficients are transmitted to the engine. The new auxiliary variable gets
    /// `name`, or a synthesized one after the new row's index. The caller should have the engine
    /// re-optimize before querying the basis again; the dictionary does not trigger a solve.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` when `coefficients` does not have exactly one entry per structural
    /// variable, `NameConflict` when the name is already taken. Both are checked before any
    /// engine mutation.
    pub fn add_row(
        &mut self,
        coefficients: &[f64],
        constant: f64,
        name: Option<&str>,
    ) -> Result<(), DictionaryError> {
        let nr_columns = self.backend.nr_columns();
        if coefficients.len() != nr_columns {
            return Err(DictionaryError::DimensionMismatch {
                expected: nr_columns,
                actual: coefficients.len(),
            });
        }

        let name = name.map_or_else(|| synthesized_row_name(self.backend.nr_rows()), str::to_string);
        if self.variables.iter().any(|variable| variable.name() == name) {
            return Err(DictionaryError::NameConflict(name));
        }

        let sparse = coefficients.iter()
            .enumerate()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .map(|(j, &coefficient)| (j, coefficient))
            .collect::<SparseTuples>();
        self.backend.add_constraint_row(&sparse, None, Some(constant), Some(&name));
        self.variables.push(Variable::new(name, self.variables.len(), VariableKind::Auxiliary));
        debug_assert_eq!(self.variables.len(), self.backend.nr_columns() + self.backend.nr_rows());

        Ok(())
    }
}

impl<B: Backend> PartialEq for Dictionary<'_, B> {
    /// Identity comparison on the engine handle plus structural comparison of the variable
    /// catalogue.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq::<B>(self.backend, other.backend) && self.variables == other.variables
    }
}

#[cfg(test)]
mod test {
    use crate::backend::{Backend, BasisStatus, WarmUpError};
    use crate::backend::dense::{Column, DenseBackend, Row};
    use crate::data::SparseTuples;
    use crate::dictionary::{Dictionary, signed};
    use crate::dictionary::error::{DictionaryError, Selection};

    /// A scripted engine: fixed statuses and tableau data, no recomputation.
    struct StubBackend {
        nr_columns: usize,
        column_statuses: Vec<BasisStatus>,
        row_statuses: Vec<BasisStatus>,
        tableau_columns: Vec<(usize, SparseTuples)>,
        tableau_rows: Vec<(usize, SparseTuples)>,
        fail_warm_up: bool,
    }

    impl Backend for StubBackend {
        fn nr_columns(&self) -> usize {
            self.nr_columns
        }

        fn nr_rows(&self) -> usize {
            self.row_statuses.len()
        }

        fn row_bounds(&self, _i: usize) -> (Option<f64>, Option<f64>) {
            (None, Some(1_f64))
        }

        fn column_lower_bound(&self, _j: usize) -> Option<f64> {
            Some(0_f64)
        }

        fn column_name(&self, _j: usize) -> Option<&str> {
            None
        }

        fn row_name(&self, _i: usize) -> Option<&str> {
            None
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
            self.tableau_columns.iter()
                .find(|&&(combined, _)| combined == k)
                .map(|(_, tuples)| tuples.clone())
                .unwrap_or_default()
        }

        fn tableau_row(&self, k: usize) -> SparseTuples {
            self.tableau_rows.iter()
                .find(|&&(combined, _)| combined == k)
                .map(|(_, tuples)| tuples.clone())
                .unwrap_or_default()
        }

        fn column_value(&self, _j: usize) -> f64 {
            0_f64
        }

        fn row_value(&self, _i: usize) -> f64 {
            0_f64
        }

        fn column_dual(&self, _j: usize) -> f64 {
            0_f64
        }

        fn row_dual(&self, _i: usize) -> f64 {
            0_f64
        }

        fn objective_value(&self) -> f64 {
            0_f64
        }

        fn warm_up(&mut self) -> Result<(), WarmUpError> {
            if self.fail_warm_up {
                Err(WarmUpError::SingularBasis)
            } else {
                Ok(())
            }
        }

        fn add_constraint_row(
            &mut self,
            _coefficients: &SparseTuples,
            _lower: Option<f64>,
            _upper: Option<f64>,
            _name: Option<&str>,
        ) {
            self.row_statuses.push(BasisStatus::Basic);
        }
    }

    #[test]
    fn sign_flip_is_keyed_on_row_space() {
        let nr_rows = 2;
        assert_eq!(signed(nr_rows, 0, 1.5), -1.5);
        assert_eq!(signed(nr_rows, 1, -2.5), 2.5);
        assert_eq!(signed(nr_rows, 2, 1.5), 1.5);
        assert_eq!(signed(nr_rows, 3, -2.5), -2.5);
    }

    /// Both extractors apply the same flip to the same synthetic tableau: values at auxiliary
    /// positions come out negated, values at structural positions untouched.
    #[test]
    fn extractors_share_the_sign_convention() {
        // Basis: row 0 and column 1 (combined 0 and 3); nonbasic: column 0 and row 1
        // (combined 2 and 1).
        let mut backend = StubBackend {
            nr_columns: 2,
            column_statuses: vec![BasisStatus::NonbasicLower, BasisStatus::Basic],
            row_statuses: vec![BasisStatus::Basic, BasisStatus::NonbasicUpper],
            tableau_columns: vec![(2, vec![(0, 1.5), (3, -2.5)])],
            tableau_rows: vec![(0, vec![(1, 4_f64), (2, -0.5)])],
            fail_warm_up: false,
        };
        let mut dictionary = Dictionary::new(&mut backend).unwrap();

        // Basic variables in catalogue order: (x_1, w_0).
        dictionary.set_entering(0).unwrap();
        assert_eq!(dictionary.entering_coefficients().unwrap(), vec![-2.5, -1.5]);

        // Nonbasic variables in catalogue order: (x_0, w_1).
        dictionary.set_leaving(2).unwrap();
        assert_eq!(dictionary.leaving_coefficients().unwrap(), vec![-0.5, -4_f64]);
    }

    #[test]
    fn extraction_requires_a_selection() {
        let mut backend = StubBackend {
            nr_columns: 1,
            column_statuses: vec![BasisStatus::Basic],
            row_statuses: vec![BasisStatus::NonbasicUpper],
            tableau_columns: Vec::new(),
            tableau_rows: Vec::new(),
            fail_warm_up: false,
        };
        let dictionary = Dictionary::new(&mut backend).unwrap();

        assert_eq!(
            dictionary.entering_coefficients(),
            Err(DictionaryError::MissingSelection(Selection::Entering)),
        );
        assert_eq!(
            dictionary.leaving_coefficients(),
            Err(DictionaryError::MissingSelection(Selection::Leaving)),
        );
    }

    #[test]
    fn selections_can_be_replaced_and_cleared() {
        let mut backend = StubBackend {
            nr_columns: 2,
            column_statuses: vec![BasisStatus::NonbasicLower, BasisStatus::NonbasicLower],
            row_statuses: vec![BasisStatus::Basic, BasisStatus::Basic],
            tableau_columns: Vec::new(),
            tableau_rows: Vec::new(),
            fail_warm_up: false,
        };
        let mut dictionary = Dictionary::new(&mut backend).unwrap();

        dictionary.set_entering(0).unwrap();
        assert_eq!(dictionary.entering().map(|variable| variable.name()), Some("x_0"));
        dictionary.set_entering(1).unwrap();
        assert_eq!(dictionary.entering().map(|variable| variable.name()), Some("x_1"));

        dictionary.set_leaving(2).unwrap();
        assert_eq!(dictionary.leaving().map(|variable| variable.name()), Some("w_0"));

        dictionary.clear_selection();
        assert_eq!(dictionary.entering(), None);
        assert_eq!(dictionary.leaving(), None);
    }

    #[test]
    fn update_surfaces_a_warm_start_failure() {
        // One row, one column; x_0 basic, w_0 entering with pivot coefficient 2.
        let mut backend = StubBackend {
            nr_columns: 1,
            column_statuses: vec![BasisStatus::Basic],
            row_statuses: vec![BasisStatus::NonbasicUpper],
            tableau_columns: vec![(0, vec![(1, 2_f64)])],
            tableau_rows: Vec::new(),
            fail_warm_up: true,
        };
        let mut dictionary = Dictionary::new(&mut backend).unwrap();
        dictionary.set_entering(1).unwrap();
        dictionary.set_leaving(0).unwrap();

        assert_eq!(
            dictionary.update(),
            Err(DictionaryError::WarmStartFailure(WarmUpError::SingularBasis)),
        );
        // No rollback and no clearing: the condition is fatal to this dictionary.
        assert!(dictionary.entering().is_some());
        assert!(dictionary.leaving().is_some());
    }

    fn bounded_column() -> Column {
        Column { cost: 1_f64, lower_bound: Some(0_f64), upper_bound: None, name: None }
    }

    #[test]
    fn construction_rejects_rows_with_lower_bounds() {
        let mut backend = DenseBackend::new(
            vec![bounded_column()],
            vec![Row {
                coefficients: vec![(0, 1_f64)],
                lower_bound: Some(0_f64),
                upper_bound: Some(1_f64),
                name: None,
            }],
        );

        assert!(matches!(
            Dictionary::new(&mut backend),
            Err(DictionaryError::StandardFormViolation(_)),
        ));
    }

    #[test]
    fn construction_rejects_rows_without_upper_bounds() {
        let mut backend = DenseBackend::new(
            vec![bounded_column()],
            vec![Row {
                coefficients: vec![(0, 1_f64)],
                lower_bound: None,
                upper_bound: None,
                name: None,
            }],
        );

        assert!(matches!(
            Dictionary::new(&mut backend),
            Err(DictionaryError::StandardFormViolation(_)),
        ));
    }

    #[test]
    fn construction_rejects_unbounded_variables() {
        let mut backend = DenseBackend::new(
            vec![Column { cost: 1_f64, lower_bound: None, upper_bound: None, name: None }],
            vec![Row {
                coefficients: vec![(0, 1_f64)],
                lower_bound: None,
                upper_bound: Some(1_f64),
                name: None,
            }],
        );

        assert!(matches!(
            Dictionary::new(&mut backend),
            Err(DictionaryError::StandardFormViolation(_)),
        ));
    }

    #[test]
    fn construction_rejects_duplicate_names() {
        let mut backend = DenseBackend::new(
            vec![
                Column { name: Some("x".to_string()), ..bounded_column() },
                Column { name: Some("x".to_string()), ..bounded_column() },
            ],
            vec![Row {
                coefficients: vec![(0, 1_f64), (1, 1_f64)],
                lower_bound: None,
                upper_bound: Some(1_f64),
                name: None,
            }],
        );

        assert_eq!(
            Dictionary::new(&mut backend).err(),
            Some(DictionaryError::NameConflict("x".to_string())),
        );
    }
}
